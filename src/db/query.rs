/// Accumulates SQL fragments that each carry exactly one `?` placeholder,
/// together with the value bound to it. Values never reach the SQL text.
#[derive(Debug, Default, Clone)]
pub struct Clauses {
    fragments: Vec<&'static str>,
    params: Vec<Option<String>>,
}

impl Clauses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: &'static str, value: Option<String>) {
        self.fragments.push(fragment);
        self.params.push(value);
    }

    /// Pushes `fragment` only when `value` is present and non-empty.
    pub fn push_present(&mut self, fragment: &'static str, value: Option<&str>) {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.push(fragment, Some(v.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn join(&self, separator: &str) -> String {
        self.fragments.join(separator)
    }

    pub fn params(&self) -> &[Option<String>] {
        &self.params
    }
}
