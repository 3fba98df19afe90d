//! Placeholder evaluation for `${name}` tokens.
//!
//! Each supported name maps to exactly one `Placeholder` variant so the
//! dispatch is exhaustive; anything that cannot be resolved from the context
//! is echoed back as its original `${name}` text.
use crate::context::ResolutionContext;
use std::path::Path;

/// Placeholder name reserved for the auto-incrementing version number.
pub const VERSION_MARKER_NAME: &str = "#";
/// Literal token for the version marker as it appears in a pattern.
pub const VERSION_MARKER: &str = "${#}";

/// Every placeholder the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    WorkspaceFolder,
    WorkspaceFolderBasename,
    File,
    RelativeFile,
    RelativeFileDirname,
    FileBasename,
    FileBasenameNoExtension,
    FileDirname,
    FileExtname,
    ExportExtension,
    /// Deferred to the version scanner; never substituted here.
    Version,
}

impl Placeholder {
    pub const ALL: [Placeholder; 11] = [
        Placeholder::WorkspaceFolder,
        Placeholder::WorkspaceFolderBasename,
        Placeholder::File,
        Placeholder::RelativeFile,
        Placeholder::RelativeFileDirname,
        Placeholder::FileBasename,
        Placeholder::FileBasenameNoExtension,
        Placeholder::FileDirname,
        Placeholder::FileExtname,
        Placeholder::ExportExtension,
        Placeholder::Version,
    ];

    /// Look up a placeholder by the name written between `${` and `}`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::WorkspaceFolder => "workspaceFolder",
            Placeholder::WorkspaceFolderBasename => "workspaceFolderBasename",
            Placeholder::File => "file",
            Placeholder::RelativeFile => "relativeFile",
            Placeholder::RelativeFileDirname => "relativeFileDirname",
            Placeholder::FileBasename => "fileBasename",
            Placeholder::FileBasenameNoExtension => "fileBasenameNoExtension",
            Placeholder::FileDirname => "fileDirname",
            Placeholder::FileExtname => "fileExtname",
            Placeholder::ExportExtension => "exportExtension",
            Placeholder::Version => VERSION_MARKER_NAME,
        }
    }

    /// Short human description, used by `exname placeholders`.
    pub fn describe(self) -> &'static str {
        match self {
            Placeholder::WorkspaceFolder => "absolute path of the project root",
            Placeholder::WorkspaceFolderBasename => "final path segment of the project root",
            Placeholder::File => "absolute path of the file",
            Placeholder::RelativeFile => "path of the file relative to the project root",
            Placeholder::RelativeFileDirname => "name of the file's containing directory",
            Placeholder::FileBasename => "file name including extension",
            Placeholder::FileBasenameNoExtension => "file name without extension",
            Placeholder::FileDirname => "absolute path of the file's containing directory",
            Placeholder::FileExtname => "file extension including the leading dot",
            Placeholder::ExportExtension => "requested export extension",
            Placeholder::Version => "next unused version number in the destination directory",
        }
    }

    /// Value for this placeholder, or `None` when the context cannot supply one.
    pub fn value(self, ctx: &ResolutionContext) -> Option<String> {
        let file = ctx.file();
        match self {
            Placeholder::WorkspaceFolder => ctx.root().map(path_text),
            Placeholder::WorkspaceFolderBasename => {
                ctx.root().and_then(|root| root.file_name()).map(lossy)
            }
            Placeholder::File => Some(path_text(file)),
            Placeholder::RelativeFile => {
                let root = ctx.root()?;
                file.strip_prefix(root).ok().map(path_text)
            }
            Placeholder::RelativeFileDirname => {
                file.parent().and_then(|dir| dir.file_name()).map(lossy)
            }
            Placeholder::FileBasename => file.file_name().map(lossy),
            Placeholder::FileBasenameNoExtension => file.file_stem().map(lossy),
            Placeholder::FileDirname => file.parent().map(path_text),
            Placeholder::FileExtname => Some(
                file.extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default(),
            ),
            Placeholder::ExportExtension => ctx.export_extension().map(str::to_string),
            Placeholder::Version => None,
        }
    }
}

/// Evaluate a single placeholder name against the context.
///
/// Unknown names, the version marker, and names the context cannot satisfy
/// all return the original `${name}` text.
pub fn evaluate(name: &str, ctx: &ResolutionContext) -> String {
    Placeholder::from_name(name)
        .and_then(|placeholder| placeholder.value(ctx))
        .unwrap_or_else(|| placeholder_text(name))
}

/// Render `name` back into its `${name}` form.
pub fn placeholder_text(name: &str) -> String {
    format!("${{{name}}}")
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn lossy(segment: &std::ffi::OsStr) -> String {
    segment.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;
