use anyhow::Context;
use creatopick_crawler::Crawler;

pub fn run(url: &str, json: bool) -> anyhow::Result<()> {
    let crawler = Crawler::default();
    let rt = super::runtime()?;
    let data = rt
        .block_on(crawler.crawl(url))
        .with_context(|| format!("crawl failed for {url}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("{}", data.title);
    if let Some(description) = &data.description {
        println!("  {description}");
    }
    if let Some(site) = &data.site_name {
        println!("  source: {site}");
    }
    println!("  images ({}):", data.images.len());
    for image in &data.images {
        println!("    {image}");
    }

    Ok(())
}
