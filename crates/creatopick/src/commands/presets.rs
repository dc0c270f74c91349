use chrono::Utc;
use creatopick_core::{next_item_id, RolePreset};
use creatopick_store::{Collection, Paths};

pub fn run_list() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let presets: Collection<RolePreset> = Collection::new(paths.presets_file());
    let items = presets.load()?;

    println!("Role Presets");
    println!("============");
    if items.is_empty() {
        println!("No presets yet. Add one with `creatopick presets add`.");
        return Ok(());
    }
    for preset in &items {
        let color = preset.color.as_deref().unwrap_or("-");
        println!("  {} [{}] {} / {}", preset.name, color, preset.field, preset.role);
    }
    Ok(())
}

pub fn run_add(name: &str, field: &str, role: &str, color: Option<String>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    paths.ensure_layout()?;

    let preset = RolePreset {
        id: next_item_id(Utc::now()),
        name: name.to_string(),
        field: field.to_string(),
        role: role.to_string(),
        color,
    };

    let presets: Collection<RolePreset> = Collection::new(paths.presets_file());
    let count = presets.append(preset)?;

    println!("Added preset \"{name}\" ({count} total)");
    Ok(())
}
