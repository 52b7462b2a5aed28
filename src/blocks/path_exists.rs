use crate::{
    config::PathExistsBlockConfig,
    providers::PathProbe,
    render::placeholder::format_placeholders,
    types::{ColorTag, Placeholder, RenderedOutput},
};

pub const NAME: &str = "path_exists";

/// Renders `%title` and `%status` (`yes`/`no`) for one watched path.
///
/// The block is tagged with the path as its instance so several watchers can
/// be told apart. `format_down` is used only when the path is missing and the
/// option is set.
pub fn render_path_exists<P: PathProbe + ?Sized>(
    probe: &P,
    config: &PathExistsBlockConfig,
) -> RenderedOutput {
    let exists = probe.path_exists(&config.path);

    let template = match (exists, config.format_down.as_deref()) {
        (false, Some(down)) => down,
        _ => config.format.as_str(),
    };
    let (color, status) = if exists {
        (ColorTag::Good, "yes")
    } else {
        (ColorTag::Bad, "no")
    };

    let placeholders = [
        Placeholder::new("%title", &config.title),
        Placeholder::new("%status", status),
    ];

    RenderedOutput::new(NAME, format_placeholders(template, &placeholders))
        .with_instance(config.path.as_str())
        .with_color(Some(color))
}
