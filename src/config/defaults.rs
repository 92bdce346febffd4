//! The project's built-in manifest and tool requirements.

use crate::toolchain::{ToolSpec, Version};

use super::schema::{GateConfig, Settings};

/// Files the build expects, relative to the project root.
pub const REQUIRED_FILES: &[&str] = &[
    "ai_engine/includes/data/csv.hpp",
    "ai_engine/includes/data/json.hpp",
    "ai_engine/src/data/csv.cc",
    "ai_engine/src/data/json.cc",
    "ai_engine/src/main.cc",
    "ai_engine/CMakeLists.txt",
    "cmake/AddScriptTests.cmake",
    "cmake/AddZig.cmake",
    "cmake/CopyMathHeader.cmake",
    "csv_parser/includes/csv.h",
    "csv_parser/src/csv.zig",
    "csv_parser/src/error.zig",
    "csv_parser/src/parser.zig",
    "csv_parser/src/root.zig",
    "csv_parser/build.zig",
    "csv_parser/CMakeLists.txt",
    "json_parser/includes/json.h",
    "json_parser/src/error.zig",
    "json_parser/src/json.zig",
    "json_parser/src/parser.zig",
    "json_parser/src/root.zig",
    "json_parser/build.zig",
    "json_parser/CMakeLists.txt",
    "scripts/check_dependencies.pl",
    "scripts/cloc.sh",
    "scripts/verify_dependencies.sh",
    "scripts/verify_tool_versions.py",
    "synapse_math/include/math/synapse_math.h",
    "synapse_math/src/lib.rs",
    "synapse_math/Cargo.toml",
    "synj_parser/includes/synj.h",
    "synj_parser/src/error.zig",
    "synj_parser/src/helper.zig",
    "synj_parser/src/lexer.zig",
    "synj_parser/src/node.zig",
    "synj_parser/src/parser.zig",
    "synj_parser/src/root.zig",
    "synj_parser/src/synj.zig",
    "synj_parser/src/tokenizer.zig",
    "synj_parser/build.zig",
    "synj_parser/CMakeLists.txt",
    "tests/test.csv",
    ".gitignore",
    "build.sh",
    "CMakeLists.txt",
    "README.md",
];

/// Built-in tool requirements, in check order.
pub fn builtin_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("cmake", Version::new(3, 20, 8)),
        ToolSpec::new("ninja", Version::new(1, 12, 1)),
        // zig has no --version flag.
        ToolSpec::new("zig", Version::new(0, 14, 0)).with_args(["version"]),
        ToolSpec::new("rustc", Version::new(1, 85, 0)),
    ]
}

impl GateConfig {
    /// The built-in manifest and tools with default settings.
    pub fn builtin() -> Self {
        Self {
            required_files: REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
            tools: builtin_tools(),
            settings: Settings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_has_every_entry_in_order() {
        let config = GateConfig::builtin();
        assert_eq!(config.required_files.len(), 46);
        assert_eq!(config.required_files[0], "ai_engine/includes/data/csv.hpp");
        assert_eq!(config.required_files.last().unwrap(), "README.md");
    }

    #[test]
    fn builtin_manifest_paths_are_relative() {
        for path in REQUIRED_FILES {
            assert!(!path.starts_with('/'), "{} is absolute", path);
            assert!(!path.contains("://"), "{} is a URI", path);
        }
    }

    #[test]
    fn builtin_tools_in_order() {
        let names: Vec<_> = builtin_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["cmake", "ninja", "zig", "rustc"]);
    }

    #[test]
    fn zig_uses_bare_version_subcommand() {
        let tools = builtin_tools();
        let zig = tools.iter().find(|t| t.name == "zig").unwrap();
        assert_eq!(zig.version_args, vec!["version"]);
        assert_eq!(zig.min_version, Version::new(0, 14, 0));

        for other in tools.iter().filter(|t| t.name != "zig") {
            assert_eq!(other.version_args, vec!["--version"]);
        }
    }
}
