/// A description of a pipeline component.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub tags: Vec<String>,
    pub arguments: Vec<ArgumentMetadata>,
    /// Keys this component writes onto the messages it sees.
    pub provides: Vec<String>,
    /// Packages that must be available at runtime.
    pub requires: Vec<String>,
}

impl Metadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Metadata {
            name: name.into(),
            version: version.into(),
            description: None,
            homepage: None,
            repository: None,
            tags: Vec::new(),
            arguments: Vec::new(),
            provides: Vec::new(),
            requires: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = non_empty(homepage.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = non_empty(repository.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_argument(mut self, arg: ArgumentMetadata) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_provides(mut self, key: impl Into<String>) -> Self {
        self.provides.push(key.into());
        self
    }

    pub fn with_requires(mut self, package: impl Into<String>) -> Self {
        self.requires.push(package.into());
        self
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentMetadata> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentMetadata {
    pub name: String,
    pub description: Option<String>,
    pub default_value: Option<String>,
    pub hints: Vec<ArgumentHint>,
}

impl ArgumentMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        ArgumentMetadata {
            name: name.into(),
            description: None,
            default_value: None,
            hints: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn with_default_value(mut self, default_value: impl ToString) -> Self {
        self.default_value = non_empty(default_value.to_string());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<ArgumentHint>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentHint {
    ArgumentType(ArgumentType),
}

impl From<ArgumentType> for ArgumentHint {
    fn from(a: ArgumentType) -> Self { ArgumentHint::ArgumentType(a) }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgumentType {
    Boolean,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
