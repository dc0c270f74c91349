use creatopick_core::SuggestConfig;
use creatopick_store::Paths;
use creatopick_suggest::SuggestClient;

pub fn run(field: &str, role: &str, topic: Option<&str>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let mut client = SuggestClient::new(
        SuggestConfig::new(),
        super::api_key_from_env(),
        paths.topic_cache_dir(),
    );

    let rt = super::runtime()?;
    let suggestions = rt.block_on(client.keywords(field, role, topic));
    super::print_suggestions(&suggestions);

    Ok(())
}
