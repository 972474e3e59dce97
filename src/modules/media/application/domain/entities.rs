use std::fmt;

/// Which kind of record an uploaded image belongs to. Used as the file name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLabel {
    Project,
    Client,
}

impl ImageLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageLabel::Project => "project",
            ImageLabel::Client => "client",
        }
    }
}

impl fmt::Display for ImageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
