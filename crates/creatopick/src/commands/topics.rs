use creatopick_core::SuggestConfig;
use creatopick_store::Paths;
use creatopick_suggest::SuggestClient;

pub fn run(field: &str, role: &str, refresh: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let mut client = SuggestClient::new(
        SuggestConfig::new(),
        super::api_key_from_env(),
        paths.topic_cache_dir(),
    );

    if refresh {
        client.cache().invalidate(field, role);
    }

    let rt = super::runtime()?;
    let suggestions = rt.block_on(client.topics(field, role));
    super::print_suggestions(&suggestions);

    Ok(())
}
