pub fn run() -> anyhow::Result<()> {
    println!("creatopick {}", env!("CARGO_PKG_VERSION"));
    println!("Reference collection and keyword suggestions for creatives");
    Ok(())
}
