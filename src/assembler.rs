use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::AssembleError;
use crate::template;

#[derive(Debug, Clone)]
pub struct PagePaths {
    pub template: PathBuf,
    pub script: PathBuf,
    pub dependencies: PathBuf,
    pub clustering: PathBuf,
    pub output: PathBuf,
}

/// Full text of every file that feeds one page.
#[derive(Debug, Clone)]
pub struct PageSources {
    pub template: String,
    pub script: String,
    pub dependencies: String,
    pub clustering: String,
}

#[derive(Debug, Clone)]
pub struct AssembleReport {
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Debug, Clone)]
pub struct PageAssembler {
    paths: PagePaths,
}

impl PageAssembler {
    pub fn new(paths: PagePaths) -> Self {
        Self { paths }
    }

    /// Reads the template, the script, then both inputs. The first failure aborts.
    pub fn load(&self) -> Result<PageSources, AssembleError> {
        let template = read_text(&self.paths.template).map_err(|source| {
            AssembleError::TemplateRead {
                path: self.paths.template.clone(),
                source,
            }
        })?;
        let script =
            read_text(&self.paths.script).map_err(|source| AssembleError::ScriptRead {
                path: self.paths.script.clone(),
                source,
            })?;
        let dependencies = read_input(&self.paths.dependencies)?;
        let clustering = read_input(&self.paths.clustering)?;

        Ok(PageSources {
            template,
            script,
            dependencies,
            clustering,
        })
    }

    /// Writes `page` plus a trailing newline, replacing any existing file.
    pub fn write(&self, page: &str) -> Result<AssembleReport, AssembleError> {
        let path = &self.paths.output;
        write_page(path, page).map_err(|source| AssembleError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        let bytes_written = page.len() + 1;
        info!(path = %path.display(), bytes = bytes_written, "wrote page");
        Ok(AssembleReport {
            output_path: path.clone(),
            bytes_written,
        })
    }

    #[instrument(skip(self), fields(output = %self.paths.output.display()))]
    pub fn assemble(&self) -> Result<AssembleReport, AssembleError> {
        let sources = self.load()?;
        let counts = template::count_tokens(&sources.template);
        debug!(
            dependencies = counts.dependencies,
            clustering = counts.clustering,
            script = counts.script,
            "template tokens"
        );
        let page = template::render(&sources);
        self.write(&page)
    }
}

pub fn assemble(
    template_path: impl Into<PathBuf>,
    script_path: impl Into<PathBuf>,
    dependencies_path: impl Into<PathBuf>,
    clustering_path: impl Into<PathBuf>,
    output_path: impl Into<PathBuf>,
) -> Result<AssembleReport, AssembleError> {
    PageAssembler::new(PagePaths {
        template: template_path.into(),
        script: script_path.into(),
        dependencies: dependencies_path.into(),
        clustering: clustering_path.into(),
        output: output_path.into(),
    })
    .assemble()
}

fn read_input(path: &Path) -> Result<String, AssembleError> {
    read_text(path).map_err(|source| AssembleError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(text)
}

fn write_page(path: &Path, page: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{page}")?;
    file.flush()
}
