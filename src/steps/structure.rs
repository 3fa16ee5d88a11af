use log::debug;

use crate::error::Result;
use crate::pipeline::{Context, Step};
use crate::tree::{build_tree, FolderSpec};

/// Materializes the modular folder layout and documents it.
pub struct FolderStructure {
    spec: FolderSpec,
}

impl FolderStructure {
    pub fn new(spec: FolderSpec) -> Self {
        Self { spec }
    }
}

impl Default for FolderStructure {
    fn default() -> Self {
        Self::new(FolderSpec::default())
    }
}

impl Step for FolderStructure {
    fn name(&self) -> &str {
        "Creating folder structure"
    }

    fn run(&self, ctx: &mut Context<'_>) -> Result<()> {
        let markers = build_tree(ctx.root(), &self.spec)?;
        debug!("Wrote {} marker files", markers.len());
        ctx.render("docs/FOLDER_STRUCTURE.md", "FOLDER_STRUCTURE.md")?;
        Ok(())
    }
}
