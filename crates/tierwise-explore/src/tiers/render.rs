use std::fmt::Debug;

use super::Tiers;

/// Marker appended when a rendering is cut short.
pub const ELLIPSIS: &str = "...";

fn bracketed(mut items: Vec<String>, limit: usize) -> String {
    if items.len() > limit {
        items.truncate(limit);
        items.push(ELLIPSIS.to_string());
    }
    format!("[{}]", items.join(", "))
}

impl<T: Clone + 'static> Tiers<T> {
    /// Renders at most `limit` tiers, then `...` if more exist.
    pub fn render_tiers_with(&self, limit: usize, show: impl Fn(&T) -> String) -> String {
        let tiers = self
            .tiers()
            .take(limit.saturating_add(1))
            .map(|tier| bracketed(tier.iter().map(&show).collect(), usize::MAX))
            .collect();
        bracketed(tiers, limit)
    }

    /// Renders at most `limit` values, then `...` if more exist.
    pub fn render_values_with(&self, limit: usize, show: impl Fn(&T) -> String) -> String {
        let values = self.iter().take(limit.saturating_add(1)).map(|x| show(&x)).collect();
        bracketed(values, limit)
    }
}

impl<T: Clone + Debug + 'static> Tiers<T> {
    pub fn render_tiers(&self, limit: usize) -> String {
        self.render_tiers_with(limit, |x| format!("{x:?}"))
    }

    pub fn render_values(&self, limit: usize) -> String {
        self.render_values_with(limit, |x| format!("{x:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_values_with_ellipsis() {
        let t = Tiers::from_sequence(|| 0u32..);
        assert_eq!(t.render_values(6), "[0, 1, 2, 3, 4, 5, ...]");
    }

    #[test]
    fn test_render_tiers_with_ellipsis() {
        let t = Tiers::from_sequence(|| 0u32..);
        assert_eq!(t.render_tiers(3), "[[0], [1], [2], ...]");
    }

    #[test]
    fn test_render_finite_has_no_ellipsis() {
        let t = Tiers::from_choices(vec![false, true]);
        assert_eq!(t.render_tiers(6), "[[false, true]]");
        assert_eq!(t.render_values(2), "[false, true]");
    }

    #[test]
    fn test_render_with_custom_formatter() {
        let t = Tiers::from_list(vec!["a", "b", "c"]);
        assert_eq!(t.render_values_with(2, |s| s.to_uppercase()), "[A, B, ...]");
    }
}
