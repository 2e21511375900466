//! GetX page generation command

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use getx_scaffold::{LocalFilesystem, PageGenerator, ScaffoldConfig};

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Generate the view, binding, logic and state files of a page
pub struct PageCommand {
    /// Directory that receives the page folder
    target: PathBuf,
    /// Page name; prompted for when absent
    name: Option<String>,
    /// Extension override
    extension: Option<String>,
    /// Print instead of writing
    dry_run: bool,
    /// Explicit configuration file
    config: Option<PathBuf>,
}

impl PageCommand {
    /// Create a new page command
    #[must_use]
    pub const fn new(
        target: PathBuf,
        name: Option<String>,
        extension: Option<String>,
        dry_run: bool,
        config: Option<PathBuf>,
    ) -> Self {
        Self {
            target,
            name,
            extension,
            dry_run,
            config,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - The page name is empty or invalid
    /// - The target directory is missing or not writable
    pub fn execute(&self) -> Result<()> {
        let mut config = ScaffoldConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(extension) = &self.extension {
            config.output.extension.clone_from(extension);
        }

        let page_name = match &self.name {
            Some(name) => name.clone(),
            None => prompt_page_name()?,
        };

        let generator = PageGenerator::new(&page_name, &config.output)
            .context("Failed to create page generator")?;

        if self.dry_run {
            return self.preview(&generator);
        }

        println!(
            "\n{} {} {}",
            style("Generating GetX page").cyan().bold(),
            style(generator.page_name()).green().bold(),
            style("...").cyan().bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Writing page files...");

        let result = generator.write_to(&self.target, &LocalFilesystem);
        spinner.finish_and_clear();
        let page = result.context("Failed to generate page files")?;

        if page.folder_created {
            println!(
                "  {} {}",
                style("created").green(),
                style(page.folder.display()).dim()
            );
        }
        for file in &page.files {
            println!("  {} {}", style(SUCCESS).green(), style(file.display()).dim());
        }

        println!("\n{}{}", SPARKLE, style("GetX files created!").green().bold());

        Ok(())
    }

    /// Print the files a run would write
    fn preview(&self, generator: &PageGenerator) -> Result<()> {
        PageGenerator::check_target(&self.target, &LocalFilesystem)
            .context("Failed to generate page files")?;
        let files = generator.render().context("Failed to render page files")?;

        println!(
            "{} {} {}",
            style("Dry run:").yellow().bold(),
            files.len(),
            style("files would be written").yellow()
        );

        for file in &files {
            println!();
            println!(
                "{} {}",
                style(self.target.join(&file.path).display()).cyan().bold(),
                style(format!("({})", file.description)).dim()
            );
            print!("{}", file.content);
        }

        Ok(())
    }
}

/// Ask for a page name on the terminal
fn prompt_page_name() -> Result<String> {
    Input::<String>::new()
        .with_prompt("Page name (e.g. \"mine\" creates mine/mine_view.dart and friends)")
        .validate_with(|input: &String| validate_input(input))
        .interact_text()
        .context("Failed to read page name")
}

/// Reject empty answers before they reach the generator
fn validate_input(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        Err("Page name cannot be empty!")
    } else {
        Ok(())
    }
}
