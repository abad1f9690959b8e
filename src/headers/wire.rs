use std::fmt;

use crate::config::LineEnding;
use crate::headers::HeaderStore;

impl HeaderStore {
    /// Renders every stored value as a `name: value` line.
    ///
    /// Names keep their first insertion order; a name with several values is
    /// written once per value. No blank line terminates the block.
    pub fn stringify(&self, line_ending: LineEnding) -> String {
        let mut result = String::new();
        for (name, values) in self.read().iter() {
            for value in values {
                result.push_str(name);
                result.push_str(": ");
                result.push_str(value);
                result.push_str(line_ending.as_str());
            }
        }
        result
    }
}

/// Same as [`HeaderStore::stringify`] with CRLF line endings.
impl fmt::Display for HeaderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify(LineEnding::Crlf))
    }
}
