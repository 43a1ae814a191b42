//! Fixed Flutter template payloads
//!
//! The bodies here are data only; [`crate::catalog::TemplateCatalog::flutter`]
//! places them and [`crate::manifest`] uses [`PUBSPEC`].

pub mod files;
pub use files::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubspec_template() {
        assert!(PUBSPEC.starts_with("name: {{projectName}}\n"));
        assert!(PUBSPEC.contains("flutter_bloc:"));
        assert!(PUBSPEC.contains("dev_dependencies:"));
        assert!(PUBSPEC.contains("- assets/lang/"));
        assert!(PUBSPEC.contains("family: Nunito"));
    }

    #[test]
    fn test_main_template() {
        assert!(MAIN.contains("void main() async"));
        assert!(MAIN.contains("import 'package:{{projectName}}/app.dart';"));
        assert!(MAIN.contains("{{appClassName}}App(appRouter: AppRouter())"));
        assert!(MAIN.contains("import 'app_bloc_observer.dart';"));
    }

    #[test]
    fn test_app_template() {
        assert!(APP.contains("class {{appClassName}}App extends StatelessWidget"));
        assert!(APP.contains("MaterialApp("));
    }

    #[test]
    fn test_feature_screen_template() {
        assert!(FEATURE_SCREEN.contains("class {{ModuleName}}Screen"));
        assert!(FEATURE_SCREEN.contains("const {{ModuleName}}Screen({super.key});"));
    }

    #[test]
    fn test_constants_template() {
        assert!(APP_CONSTANTS.contains("appName = '{{appTitle}}'"));
        assert!(APP_CONSTANTS.contains("Locale('ar')"));
    }
}
