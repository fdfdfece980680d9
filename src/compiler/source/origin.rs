impl std::fmt::Display for Origin {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Synthetic => formatter.write_str("<synthetic>"),
            Origin::Buffer(name) => write!(formatter, "<{}>", name),
            Origin::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Synthetic,
    Buffer(std::string::String),
    File(std::path::PathBuf),
}

pub trait HasOrigin {
    fn origin(&self) -> Origin;
}
