use std::collections::{BTreeSet, HashMap};

/// Instruction text with `{name}` placeholders.
///
/// Substitution is literal and single-pass: a substituted value is never
/// scanned for further placeholders, and placeholders without a supplied value
/// are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template_text: String,
    required_variable_names: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptTemplateError {
    #[error("missing template variable: {name}")]
    MissingVariable { name: String },
    #[error("template never references required variable: {name}")]
    UnreferencedVariable { name: String },
}

impl PromptTemplate {
    pub fn new<I, S>(template_text: impl Into<String>, required_variable_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template_text: template_text.into(),
            required_variable_names: required_variable_names
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }

    /// Like [`PromptTemplate::new`], but rejects text that does not contain a
    /// placeholder for every required variable.
    pub fn checked<I, S>(
        template_text: impl Into<String>,
        required_variable_names: I,
    ) -> Result<Self, PromptTemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let template = Self::new(template_text, required_variable_names);
        let present = template.placeholder_names();
        if let Some(name) = template
            .required_variable_names
            .iter()
            .find(|name| !present.contains(*name))
        {
            return Err(PromptTemplateError::UnreferencedVariable { name: name.clone() });
        }
        Ok(template)
    }

    pub fn template_text(&self) -> &str {
        &self.template_text
    }

    /// Names of all `{name}` placeholders appearing in the text.
    pub fn placeholder_names(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        scan(&self.template_text, |segment| {
            if let Segment::Placeholder(name) = segment {
                names.insert(name.to_string());
            }
        });
        names
    }

    pub fn render(&self, variables: &HashMap<&str, &str>) -> Result<String, PromptTemplateError> {
        if let Some(name) = self
            .required_variable_names
            .iter()
            .find(|name| !variables.contains_key(name.as_str()))
        {
            return Err(PromptTemplateError::MissingVariable { name: name.clone() });
        }

        let mut rendered = String::with_capacity(self.template_text.len());
        scan(&self.template_text, |segment| match segment {
            Segment::Literal(text) => rendered.push_str(text),
            Segment::Placeholder(name) => match variables.get(name) {
                Some(value) => rendered.push_str(value),
                None => {
                    rendered.push('{');
                    rendered.push_str(name);
                    rendered.push('}');
                }
            },
        });
        Ok(rendered)
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn scan<'a>(text: &'a str, mut visit: impl FnMut(Segment<'a>)) {
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        visit(Segment::Literal(&rest[..open]));
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                visit(Segment::Placeholder(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                visit(Segment::Literal("{"));
                rest = after;
            }
        }
    }
    visit(Segment::Literal(rest));
}

fn is_placeholder_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
