//! The Flutter clean-architecture layout

use convert_case::{Case, Casing};

use super::{Placeholders, TemplateCatalog};
use crate::config::LayoutSettings;
use crate::error::Result;
use crate::templates;

/// Shared infrastructure directories under `lib/core`
pub const CORE_DIRS: &[&str] = &[
    "animations",
    "constants",
    "errors",
    "network",
    "services",
    "utils",
    "widgets",
    "theme",
    "routing",
    "di",
    "cubit/locale",
    "cubit/theme",
];

/// Directories created inside every feature module
pub const FEATURE_SUBDIRS: &[&str] = &[
    "data/datasources",
    "data/models",
    "data/repositories",
    "domain/entities",
    "domain/repositories",
    "domain/usecases",
    "presentation/bloc",
    "presentation/screens",
    "presentation/widgets",
];

/// Directories under `assets`
pub const ASSET_DIRS: &[&str] = &["images", "icons", "lottie", "lang", "fonts"];

/// Placeholder key for a feature module's raw name
pub const MODULE_NAME: &str = "moduleName";
/// Placeholder key for a feature module's class-name form
///
/// Bound to the Pascal case of the feature name: `auth` becomes `Auth` and
/// `user_profile` becomes `UserProfile`, not `User_profile`. Single-word
/// features come out the same as upper-casing the first letter.
pub const MODULE_CLASS_NAME: &str = "ModuleName";

impl TemplateCatalog {
    /// The Flutter project layout for the given settings
    ///
    /// # Errors
    ///
    /// Returns an error if a configured feature name yields an invalid path.
    pub fn flutter(layout: &LayoutSettings) -> Result<Self> {
        let ext = &layout.file_extension;

        let mut builder = Self::builder()
            .directory("lib")
            .directories("lib/core", CORE_DIRS)
            .directory("lib/generated")
            .directory("lib/features");

        for feature in &layout.features {
            builder = builder.directories(format!("lib/features/{feature}"), FEATURE_SUBDIRS);
        }

        builder = builder
            .directory("assets")
            .directories("assets", ASSET_DIRS)
            .file(
                format!("lib/core/di/service_locator.{ext}"),
                templates::SERVICE_LOCATOR,
            )
            .file(
                format!("lib/core/routing/app_router.{ext}"),
                templates::APP_ROUTER,
            )
            .file(
                format!("lib/core/utils/app_shared_preferences.{ext}"),
                templates::APP_SHARED_PREFERENCES,
            )
            .file(
                format!("lib/app_bloc_observer.{ext}"),
                templates::APP_BLOC_OBSERVER,
            )
            .file(
                format!("lib/core/constants/app_constants.{ext}"),
                templates::APP_CONSTANTS,
            )
            .file(
                format!("lib/generated/assets.{ext}"),
                templates::GENERATED_ASSETS,
            );

        for feature in &layout.features {
            builder = builder.file_with(
                format!("lib/features/{feature}/presentation/screens/{feature}_screen.{ext}"),
                templates::FEATURE_SCREEN,
                module_bindings(feature),
            );
        }

        builder
            .file(format!("lib/main.{ext}"), templates::MAIN)
            .file(format!("lib/app.{ext}"), templates::APP)
            .build()
    }
}

fn module_bindings(feature: &str) -> Placeholders {
    let mut bindings = Placeholders::new();
    bindings.insert(MODULE_NAME, feature);
    bindings.insert(MODULE_CLASS_NAME, feature.to_case(Case::Pascal));
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn dir_paths(catalog: &TemplateCatalog) -> Vec<&Path> {
        catalog.directories().iter().map(|d| d.path()).collect()
    }

    #[test]
    fn test_default_layout_shape() {
        let catalog = TemplateCatalog::flutter(&LayoutSettings::default()).unwrap();

        // lib + 12 core + generated + features + 27 feature dirs + assets + 5 assets
        assert_eq!(catalog.directories().len(), 1 + 12 + 1 + 1 + 27 + 1 + 5);
        // 6 core files + 3 screens + main + app
        assert_eq!(catalog.files().len(), 11);
    }

    #[test]
    fn test_layout_contains_expected_paths() {
        let catalog = TemplateCatalog::flutter(&LayoutSettings::default()).unwrap();
        let dirs = dir_paths(&catalog);

        assert!(dirs.contains(&Path::new("lib/core/cubit/locale")));
        assert!(dirs.contains(&Path::new("lib/features/onboarding/domain/usecases")));
        assert!(dirs.contains(&Path::new("assets/lottie")));

        let files: Vec<_> = catalog.files().iter().map(|f| f.path()).collect();
        assert!(files.contains(&Path::new("lib/core/di/service_locator.dart")));
        assert!(files.contains(&Path::new("lib/app_bloc_observer.dart")));
        assert!(files.contains(&Path::new(
            "lib/features/auth/presentation/screens/auth_screen.dart"
        )));
        assert_eq!(files.last(), Some(&Path::new("lib/app.dart")));
    }

    #[test]
    fn test_every_file_parent_is_declared() {
        let catalog = TemplateCatalog::flutter(&LayoutSettings::default()).unwrap();
        let dirs = dir_paths(&catalog);

        for file in catalog.files() {
            let parent = file.path().parent().unwrap();
            assert!(
                dirs.iter().any(|d| d.starts_with(parent)),
                "parent of {} is not covered by a directory entry",
                file.path().display()
            );
        }
    }

    #[test]
    fn test_custom_features_and_extension() {
        let layout = LayoutSettings {
            features: vec!["user_profile".to_string()],
            file_extension: "txt".to_string(),
        };
        let catalog = TemplateCatalog::flutter(&layout).unwrap();

        let screen = catalog
            .files()
            .iter()
            .find(|f| f.path().ends_with("user_profile_screen.txt"))
            .unwrap();
        assert_eq!(screen.bindings().get(MODULE_NAME), Some("user_profile"));
        assert_eq!(screen.bindings().get(MODULE_CLASS_NAME), Some("UserProfile"));
        assert_eq!(catalog.files().len(), 6 + 1 + 2);
    }
}
