//! Owned, decoded attribute record for elements that are rebuilt.

/// A single decoded attribute. `value` has its character references resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The name without any `prefix:`.
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// ASCII case-insensitive comparison against the local name.
    pub fn is_named(&self, local_name: &str) -> bool {
        self.local_name().eq_ignore_ascii_case(local_name)
    }
}

/// Attributes in authoring order. Duplicate names are kept as they appear in
/// the source; [`AttributeList::get`] and [`AttributeList::get_mut`] resolve
/// to the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.0.push(attribute);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn get(&self, local_name: &str) -> Option<&Attribute> {
        self.0.iter().find(|a| a.is_named(local_name))
    }

    pub fn get_mut(&mut self, local_name: &str) -> Option<&mut Attribute> {
        self.0.iter_mut().find(|a| a.is_named(local_name))
    }

    /// Removes every occurrence of `local_name` and returns how many were removed.
    pub fn remove_all(&mut self, local_name: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|a| !a.is_named(local_name));
        before - self.0.len()
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
