//! GetX page generator
//!
//! Coordinates the generation of the four files that make up a page:
//! - View (`<page>_view`)
//! - Binding (`<page>_binding`)
//! - Logic (`<page>_logic`)
//! - State (`<page>_state`)
//!
//! Files are written into `<target>/<page>/`. The folder is created when
//! missing and reused when present. Existing files with the same names are
//! overwritten without error.

use std::path::{Path, PathBuf};

use super::filesystem::{Filesystem, LocalFilesystem};
use super::helpers::TemplateHelpers;
use crate::config::OutputSettings;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::{PageContext, TemplateKind, TemplateRegistry};

/// GetX page generator
pub struct PageGenerator {
    /// Values substituted into the templates
    context: PageContext,
    /// Template registry
    templates: TemplateRegistry,
}

impl PageGenerator {
    /// Create a new page generator
    ///
    /// # Arguments
    ///
    /// * `page_name` - Page name (e.g., "mine", "user_profile")
    /// * `settings` - Output settings (file extension)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The page name is empty or cannot be used as a folder name
    /// - The configured extension is invalid
    pub fn new(page_name: &str, settings: &OutputSettings) -> ScaffoldResult<Self> {
        validate_page_name(page_name)?;
        settings.validate()?;

        let context = PageContext {
            page_name: page_name.to_string(),
            class_name: TemplateHelpers::to_pascal_case(page_name),
            title: TemplateHelpers::to_title_case(page_name),
            extension: settings.extension.clone(),
        };

        Ok(Self {
            context,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Page name as given
    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.context.page_name
    }

    /// Derived `PascalCase` class prefix
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.context.class_name
    }

    /// Render all page files without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self) -> ScaffoldResult<Vec<GeneratedFile>> {
        TemplateKind::ALL
            .iter()
            .map(|&kind| {
                let content = self.templates.render(kind, &self.context)?;
                let file_name = kind.file_name(&self.context.page_name, &self.context.extension);
                tracing::debug!(%kind, file = %file_name, bytes = content.len(), "Rendered template");

                Ok(GeneratedFile {
                    kind,
                    path: PathBuf::from(&self.context.page_name).join(file_name),
                    content,
                    description: format!("{} for {}", kind.description(), self.context.class_name),
                })
            })
            .collect()
    }

    /// Check that `target` is an existing directory
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::TargetNotFound`] or
    /// [`ScaffoldError::TargetNotDirectory`].
    pub fn check_target<F>(target: &Path, fs: &F) -> ScaffoldResult<()>
    where
        F: Filesystem + ?Sized,
    {
        if !fs.exists(target) {
            return Err(ScaffoldError::TargetNotFound {
                path: target.to_path_buf(),
            });
        }
        if !fs.is_dir(target) {
            return Err(ScaffoldError::TargetNotDirectory {
                path: target.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Render and write all page files under `target`
    ///
    /// All templates are rendered before anything is written, so a render
    /// failure leaves the filesystem untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `target` does not exist or is not a directory
    /// - A template fails to render
    /// - The page folder cannot be created
    /// - A file cannot be written
    pub fn write_to<F>(&self, target: &Path, fs: &F) -> ScaffoldResult<GeneratedPage>
    where
        F: Filesystem + ?Sized,
    {
        Self::check_target(target, fs)?;

        let files = self.render()?;

        let folder = target.join(&self.context.page_name);
        let folder_created = if fs.exists(&folder) {
            if !fs.is_dir(&folder) {
                return Err(ScaffoldError::TargetNotDirectory { path: folder });
            }
            false
        } else {
            fs.create_dir(&folder).map_err(|source| ScaffoldError::CreateDir {
                path: folder.clone(),
                source,
            })?;
            tracing::debug!(folder = %folder.display(), "Created page folder");
            true
        };

        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            let full_path = target.join(&file.path);

            if fs.exists(&full_path) {
                tracing::warn!(file = %full_path.display(), "Overwriting existing file");
            }

            fs.write(&full_path, &file.content)
                .map_err(|source| ScaffoldError::WriteFile {
                    path: full_path.clone(),
                    source,
                })?;

            written.push(full_path);
        }

        tracing::info!(
            page = %self.context.page_name,
            class = %self.context.class_name,
            folder = %folder.display(),
            files = written.len(),
            "Generated GetX page"
        );

        Ok(GeneratedPage {
            folder,
            folder_created,
            files: written,
        })
    }
}

/// Generate a page with default settings on the local filesystem
///
/// # Errors
///
/// See [`PageGenerator::new`] and [`PageGenerator::write_to`].
pub fn generate_files(page_name: &str, target: &Path) -> ScaffoldResult<GeneratedPage> {
    PageGenerator::new(page_name, &OutputSettings::default())?.write_to(target, &LocalFilesystem)
}

/// Check that a page name can be used as a folder and file prefix
fn validate_page_name(page_name: &str) -> ScaffoldResult<()> {
    if page_name.is_empty() {
        return Err(ScaffoldError::EmptyPageName);
    }

    if matches!(page_name, "." | "..") || page_name.contains(['/', '\\']) {
        return Err(ScaffoldError::InvalidPageName {
            name: page_name.to_string(),
        });
    }

    Ok(())
}

/// Represents a rendered page file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Template kind
    pub kind: TemplateKind,
    /// Path relative to the target directory
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Outcome of writing a page
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    /// Page folder (`<target>/<page>`)
    pub folder: PathBuf,
    /// Whether the folder was created by this run
    pub folder_created: bool,
    /// Written files, in write order
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::filesystem::MockFilesystem;
    use std::io;

    fn generator(page_name: &str) -> PageGenerator {
        PageGenerator::new(page_name, &OutputSettings::default()).unwrap()
    }

    #[test]
    fn test_new_generator() {
        let generator = generator("user_profile");
        assert_eq!(generator.page_name(), "user_profile");
        assert_eq!(generator.class_name(), "UserProfile");
        assert_eq!(generator.context.title, "User Profile");
        assert_eq!(generator.context.extension, "dart");
    }

    #[test]
    fn test_empty_page_name() {
        let result = PageGenerator::new("", &OutputSettings::default());
        assert!(matches!(result, Err(ScaffoldError::EmptyPageName)));
    }

    #[test]
    fn test_invalid_page_names() {
        for name in [".", "..", "a/b", "a\\b", "../escape"] {
            let result = PageGenerator::new(name, &OutputSettings::default());
            assert!(
                matches!(result, Err(ScaffoldError::InvalidPageName { .. })),
                "Name should be invalid: {name}"
            );
        }
    }

    #[test]
    fn test_invalid_extension() {
        let settings = OutputSettings {
            extension: ".dart".to_string(),
        };
        let result = PageGenerator::new("mine", &settings);
        assert!(matches!(result, Err(ScaffoldError::InvalidExtension { .. })));
    }

    #[test]
    fn test_render_all_kinds() {
        let files = generator("test_page").render().unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("test_page/test_page_view.dart"),
                PathBuf::from("test_page/test_page_binding.dart"),
                PathBuf::from("test_page/test_page_logic.dart"),
                PathBuf::from("test_page/test_page_state.dart"),
            ]
        );
        assert_eq!(files[0].kind, TemplateKind::View);
        assert_eq!(files[3].description, "page state for TestPage");
    }

    #[test]
    fn test_render_cross_references() {
        let files = generator("user_profile").render().unwrap();

        assert!(files[0]
            .content
            .contains("class UserProfileView extends GetView<UserProfileLogic>"));
        assert!(files[0].content.contains("Text('User Profile')"));
        assert!(files[1].content.contains("class UserProfileBinding extends Bindings"));
        assert!(files[1].content.contains("Get.lazyPut(() => UserProfileLogic());"));
        assert!(files[2].content.contains("final UserProfileState state = UserProfileState();"));
        assert!(files[3].content.contains("class UserProfileState {"));
    }

    #[test]
    fn test_camel_case_page_name_keeps_quirk() {
        let files = generator("minePage").render().unwrap();

        assert!(files[0].content.contains("class MinepageView extends GetView<MinepageLogic>"));
        assert!(files[0].content.contains("Text('MinePage')"));
        assert_eq!(files[0].path, PathBuf::from("minePage/minePage_view.dart"));
    }

    #[test]
    fn test_missing_target_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir().never();
        fs.expect_write().never();

        let result = generator("mine").write_to(Path::new("/missing"), &fs);
        assert!(matches!(result, Err(ScaffoldError::TargetNotFound { .. })));
    }

    #[test]
    fn test_target_file_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_create_dir().never();
        fs.expect_write().never();

        let result = generator("mine").write_to(Path::new("/file.txt"), &fs);
        assert!(matches!(result, Err(ScaffoldError::TargetNotDirectory { .. })));
    }

    #[test]
    fn test_check_target() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path != Path::new("/missing"));
        fs.expect_is_dir()
            .returning(|path| path == Path::new("/project"));
        fs.expect_create_dir().never();
        fs.expect_write().never();

        assert!(PageGenerator::check_target(Path::new("/project"), &fs).is_ok());
        assert!(matches!(
            PageGenerator::check_target(Path::new("/missing"), &fs),
            Err(ScaffoldError::TargetNotFound { path }) if path == Path::new("/missing")
        ));
        assert!(matches!(
            PageGenerator::check_target(Path::new("/file.txt"), &fs),
            Err(ScaffoldError::TargetNotDirectory { path }) if path == Path::new("/file.txt")
        ));
    }

    #[test]
    fn test_creates_folder_and_writes_four_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|path| path == Path::new("/project"));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir()
            .withf(|path| path == Path::new("/project/mine"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write()
            .withf(|path, _| path.starts_with("/project/mine"))
            .times(4)
            .returning(|_, _| Ok(()));

        let page = generator("mine").write_to(Path::new("/project"), &fs).unwrap();
        assert!(page.folder_created);
        assert_eq!(page.folder, PathBuf::from("/project/mine"));
        assert_eq!(page.files.len(), 4);
        assert_eq!(page.files[2], PathBuf::from("/project/mine/mine_logic.dart"));
    }

    #[test]
    fn test_existing_folder_is_reused() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir()
            .returning(|path| !path.extension().is_some_and(|ext| ext == "dart"));
        fs.expect_create_dir().never();
        fs.expect_write().times(4).returning(|_, _| Ok(()));

        let page = generator("mine").write_to(Path::new("/project"), &fs).unwrap();
        assert!(!page.folder_created);
        assert_eq!(page.files.len(), 4);
    }

    #[test]
    fn test_folder_occupied_by_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|path| path == Path::new("/project"));
        fs.expect_create_dir().never();
        fs.expect_write().never();

        let result = generator("mine").write_to(Path::new("/project"), &fs);
        match result {
            Err(ScaffoldError::TargetNotDirectory { path }) => {
                assert_eq!(path, PathBuf::from("/project/mine"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_dir_failure_is_propagated() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|path| path == Path::new("/project"));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        fs.expect_write().never();

        let result = generator("mine").write_to(Path::new("/project"), &fs);
        assert!(matches!(result, Err(ScaffoldError::CreateDir { .. })));
    }

    #[test]
    fn test_write_failure_stops_generation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|path| path == Path::new("/project"));
        fs.expect_is_dir().returning(|_| true);
        fs.expect_create_dir().returning(|_| Ok(()));
        fs.expect_write()
            .times(1)
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let result = generator("mine").write_to(Path::new("/project"), &fs);
        match result {
            Err(ScaffoldError::WriteFile { path, .. }) => {
                assert_eq!(path, PathBuf::from("/project/mine/mine_view.dart"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
