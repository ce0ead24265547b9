fn main() -> anyhow::Result<()> {
    iteminfo::cli::run_cli()
}
