fn main() -> anyhow::Result<()> {
    formcheck::app::run()
}
