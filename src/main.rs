fn main() -> anyhow::Result<()> {
    buttonsmith::run()?;
    Ok(())
}
