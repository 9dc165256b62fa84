#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use jsonbatch::AutomatorParams;

/// Stand-in converter: records each call, fails inputs whose name contains
/// "fail", refuses to write into a missing directory, otherwise writes a CSV.
const FAKE_CONVERTER: &str = r#"
echo "$(basename "$1")" >> "$(dirname "$0")/calls.log"
case "$(basename "$1")" in
  *fail*) echo "cannot convert $1" >&2; exit 1 ;;
esac
[ -d "$(dirname "$2")" ] || { echo "no output dir" >&2; exit 9; }
printf 'id,value\n1,converted\n' > "$2"
"#;

pub struct Fixture {
    pub root: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("in")).unwrap();
        fs::create_dir(root.path().join("tools")).unwrap();
        fs::write(root.path().join("tools").join("convert.sh"), FAKE_CONVERTER).unwrap();
        Self { root }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("in")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out").join("csv")
    }

    pub fn script(&self) -> PathBuf {
        self.root.path().join("tools").join("convert.sh")
    }

    pub fn params(&self) -> AutomatorParams {
        AutomatorParams {
            launcher: Some(PathBuf::from("sh")),
            ..AutomatorParams::with_artifact(self.script())
        }
    }

    pub fn add_input(&self, name: &str, body: &str) -> PathBuf {
        let path = self.input_dir().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    /// Input file names the converter was invoked with, in order.
    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.root.path().join("tools").join("calls.log"))
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
