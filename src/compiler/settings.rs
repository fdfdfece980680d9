use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Settings {
    inner: FxHashMap<Setting, bool>,
    initial_line: usize,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            inner: FxHashMap::default(),
            initial_line: 1,
        }
    }

    pub fn enable(&mut self, setting: Setting) {
        self.inner.insert(setting, true);
    }

    pub fn disable(&mut self, setting: Setting) {
        self.inner.insert(setting, false);
    }

    pub fn is_enabled(&self, setting: &Setting) -> bool {
        match self.inner.get(setting) {
            Some(v) => *v,
            _ => false,
        }
    }

    /// Line number reported for the first line of a source.
    pub fn initial_line(&self) -> usize {
        self.initial_line
    }

    pub fn set_initial_line(&mut self, line: usize) {
        self.initial_line = line;
    }
}

impl Default for Settings {
    fn default() -> Settings {
        let mut settings = Settings::new();

        settings.enable(Setting::IntegerLiterals);
        settings.enable(Setting::Comments);

        settings
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Setting {
    /// `1L` becomes an integer value instead of a float.
    IntegerLiterals,
    /// Keep comment tokens in the output of `tokenize`.
    Comments,
}

impl std::fmt::Display for Setting {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let name = match self {
            Setting::IntegerLiterals => "integer-literals",
            Setting::Comments => "comments",
        };

        fmt.write_str(name)
    }
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer-literals" => Ok(Setting::IntegerLiterals),
            "comments" => Ok(Setting::Comments),
            other => Err(format!("Unknown setting {}", other)),
        }
    }
}
