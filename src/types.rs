/// A named token in a block template together with the text it expands to.
///
/// Names carry their `%` sentinel, e.g. `%total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Placeholder<'a> {
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Good,
    Degraded,
    Bad,
}

impl ColorTag {
    /// The configuration key naming this color.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Good => "color_good",
            ColorTag::Degraded => "color_degraded",
            ColorTag::Bad => "color_bad",
        }
    }
}

/// One rendered block, ready to be handed to an output sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    pub name: &'static str,
    pub instance: Option<String>,
    pub full_text: String,
    pub color: Option<ColorTag>,
}

impl RenderedOutput {
    pub fn new(name: &'static str, full_text: impl Into<String>) -> Self {
        Self {
            name,
            full_text: full_text.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Option<ColorTag>) -> Self {
        self.color = color;
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

/// Raw `/proc/meminfo` figures, in kibibytes as the kernel reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfoSnapshot {
    pub total_kb: u64,
    pub free_kb: u64,
    pub available_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
    pub shared_kb: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tag_names_match_config_keys() {
        assert_eq!(ColorTag::Good.as_str(), "color_good");
        assert_eq!(ColorTag::Degraded.as_str(), "color_degraded");
        assert_eq!(ColorTag::Bad.as_str(), "color_bad");
    }

    #[test]
    fn rendered_output_builder() {
        let output = RenderedOutput::new("path_exists", "VPN: yes")
            .with_color(Some(ColorTag::Good))
            .with_instance("/tmp");
        assert_eq!(output.name, "path_exists");
        assert_eq!(output.instance.as_deref(), Some("/tmp"));
        assert_eq!(output.color, Some(ColorTag::Good));
    }
}
