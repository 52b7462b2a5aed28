use crate::types::Placeholder;

/// Expands every placeholder token in `template`.
///
/// The template is scanned once from left to right. At each position the
/// first placeholder, in slice order, whose name matches is replaced by its
/// value; anything else is copied through, including unknown `%` tokens.
/// Substituted values are not scanned again.
pub fn format_placeholders(template: &str, placeholders: &[Placeholder<'_>]) -> String {
    let extra: usize = placeholders.iter().map(|p| p.value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(ch) = rest.chars().next() {
        let matched = placeholders
            .iter()
            .find(|p| !p.name.is_empty() && rest.starts_with(p.name));

        match matched {
            Some(placeholder) => {
                out.push_str(placeholder.value);
                rest = &rest[placeholder.name.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}
