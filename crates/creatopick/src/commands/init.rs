use creatopick_store::Paths;

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    paths.ensure_layout()?;

    println!("✓ Initialized data directory at {}", paths.data_dir.display());
    println!("\nLayout:");
    println!("  library.json / bookmarks.json / enhanced.json");
    println!("  history.json / presets.json");
    println!("  topic_cache/ and images/");

    Ok(())
}
