//! Which rewrite, if any, a start tag gets.
use ghost2hugo_markup::StartTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementAction {
    /// Drop `height`/`width` and close the element explicitly.
    ImageNormalize,
    /// Substitute the `href`, flatten the content to text, close explicitly.
    AnchorRewrite,
    /// Emit every token unchanged.
    PassThrough,
}

/// Local element name to action. Built once per rewriter, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<(&'static str, ElementAction)>,
}

impl PolicyTable {
    pub fn new(replace_links: bool) -> Self {
        let mut rules = vec![("img", ElementAction::ImageNormalize)];
        if replace_links {
            rules.push(("a", ElementAction::AnchorRewrite));
        }
        Self { rules }
    }

    pub fn action_for(&self, tag: &StartTag<'_>) -> ElementAction {
        let action = self
            .rules
            .iter()
            .find(|(name, _)| tag.is_named(name))
            .map_or(ElementAction::PassThrough, |(_, action)| *action);

        // An anchor with no attributes is never consumed as a unit, so its
        // nested markup survives.
        if action == ElementAction::AnchorRewrite && !tag.has_attributes() {
            return ElementAction::PassThrough;
        }
        action
    }
}
