//! Template file contents
//!
//! Context placeholders: `{{projectName}}`, `{{appClassName}}`, `{{appTitle}}`.
//! Feature screens additionally see `{{moduleName}}` and `{{ModuleName}}`.

/// `lib/core/di/service_locator.dart`
pub const SERVICE_LOCATOR: &str = r"import 'package:get_it/get_it.dart';

/// Dependency injection setup for {{appTitle}}.
final getIt = GetIt.instance;

Future<void> setupServiceLocator() async {
  // Register services, repositories and blocs here.
}
";

/// `lib/core/routing/app_router.dart`
pub const APP_ROUTER: &str = r"import 'package:flutter/material.dart';

import 'routes.dart';

class AppRouter {
  Route<dynamic>? generateRoute(RouteSettings settings) {
    switch (settings.name) {
      default:
        return null;
    }
  }
}
";

/// `lib/core/utils/app_shared_preferences.dart`
pub const APP_SHARED_PREFERENCES: &str = r"import 'package:shared_preferences/shared_preferences.dart';

class AppPreferences {
  static final AppPreferences _instance = AppPreferences._internal();
  factory AppPreferences() => _instance;
  AppPreferences._internal();

  late SharedPreferences _prefs;

  Future<void> init() async {
    _prefs = await SharedPreferences.getInstance();
  }

  String? getString(String key) => _prefs.getString(key);

  Future<bool> setString(String key, String value) => _prefs.setString(key, value);
}
";

/// `lib/app_bloc_observer.dart`
pub const APP_BLOC_OBSERVER: &str = r"import 'package:flutter/foundation.dart';
import 'package:flutter_bloc/flutter_bloc.dart';

class AppBlocObserver extends BlocObserver {
  @override
  void onChange(BlocBase bloc, Change change) {
    super.onChange(bloc, change);
    debugPrint('${bloc.runtimeType} $change');
  }

  @override
  void onError(BlocBase bloc, Object error, StackTrace stackTrace) {
    debugPrint('${bloc.runtimeType} $error');
    super.onError(bloc, error, stackTrace);
  }
}
";

/// `lib/core/constants/app_constants.dart`
pub const APP_CONSTANTS: &str = r"import 'package:flutter/material.dart';

class AppConstants {
  static const String appName = '{{appTitle}}';
  static const supportedLocales = [Locale('en'), Locale('ar')];
}
";

/// `lib/generated/assets.dart`
pub const GENERATED_ASSETS: &str = r"/* generated assets references */
class Assets {
  Assets._();

  static const String imagesDir = 'assets/images';
  static const String iconsDir = 'assets/icons';
  static const String lottieDir = 'assets/lottie';
}
";

/// `lib/features/<module>/presentation/screens/<module>_screen.dart`
pub const FEATURE_SCREEN: &str = r"import 'package:flutter/material.dart';

class {{ModuleName}}Screen extends StatelessWidget {
  const {{ModuleName}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: const Text('{{ModuleName}}')),
      body: const Center(child: Text('{{ModuleName}} content here')),
    );
  }
}
";

/// `lib/main.dart`
pub const MAIN: &str = r"import 'package:easy_localization/easy_localization.dart';
import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';
import 'package:{{projectName}}/app.dart';

import 'app_bloc_observer.dart';
import 'core/constants/app_constants.dart';
import 'core/cubit/locale/locale_cubit.dart';
import 'core/cubit/theme/theme_cubit.dart';
import 'core/routing/app_router.dart';
import 'core/utils/app_shared_preferences.dart';

void main() async {
  WidgetsFlutterBinding.ensureInitialized();
  await EasyLocalization.ensureInitialized();
  Bloc.observer = AppBlocObserver();
  await AppPreferences().init();
  runApp(
    EasyLocalization(
      supportedLocales: AppConstants.supportedLocales,
      path: 'assets/lang',
      fallbackLocale: const Locale('en'),
      startLocale: const Locale('en'),
      child: MultiBlocProvider(
        providers: [
          BlocProvider(create: (_) => LocaleCubit()),
          BlocProvider(create: (_) => ThemeCubit()),
        ],
        child: {{appClassName}}App(appRouter: AppRouter()),
      ),
    ),
  );
}
";

/// `lib/app.dart`
pub const APP: &str = r"import 'package:easy_localization/easy_localization.dart';
import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';
import 'package:flutter_screenutil/flutter_screenutil.dart';

import 'core/constants/app_constants.dart';
import 'core/cubit/theme/theme_cubit.dart';
import 'core/routing/app_router.dart';
import 'core/routing/routes.dart';
import 'core/theme/app_theme.dart';

class {{appClassName}}App extends StatelessWidget {
  final AppRouter appRouter;

  const {{appClassName}}App({super.key, required this.appRouter});

  @override
  Widget build(BuildContext context) {
    return ScreenUtilInit(
      designSize: const Size(402, 874),
      minTextAdapt: true,
      splitScreenMode: true,
      builder: (context, child) => BlocBuilder<ThemeCubit, ThemeState>(
        builder: (context, themeState) => MaterialApp(
          title: AppConstants.appName,
          debugShowCheckedModeBanner: false,
          theme: AppTheme.lightTheme,
          darkTheme: AppTheme.darkTheme,
          themeMode: themeState.themeMode,
          locale: context.locale,
          supportedLocales: context.supportedLocales,
          localizationsDelegates: context.localizationDelegates,
          initialRoute: Routes.splashScreen,
          onGenerateRoute: appRouter.generateRoute,
          home: child,
        ),
      ),
    );
  }
}
";

/// Replacement `pubspec.yaml`, written only when the marker dependency is absent
pub const PUBSPEC: &str = r##"name: {{projectName}}
description: "A new Flutter project."
publish_to: 'none'
version: 1.0.0+1

environment:
  sdk: ">=3.7.2 <4.0.0"

dependencies:
  flutter:
    sdk: flutter
  flutter_bloc: ^9.1.0
  dio: ^5.8.0+1
  shared_preferences: ^2.2.2
  easy_localization: ^3.0.7+1
  intl:
  equatable: ^2.0.7
  get_it: ^8.0.3
  cached_network_image: ^3.4.1
  flutter_screenutil: ^5.9.3
  flutter_animate: ^4.5.2
  freezed_annotation: ^3.0.0
  json_annotation: ^4.9.0
  flutter_native_splash: ^2.4.5
  animate_do: ^4.2.0
  lottie: ^3.3.1
  google_fonts: ^6.2.1
  flutter_launcher_icons: ^0.14.3
  animator: ^3.3.0
  dartz: ^0.10.1
  flutter_svg: ^2.0.7
  cupertino_icons: ^1.0.8

dev_dependencies:
  flutter_test:
    sdk: flutter
  build_runner: ^2.4.6
  freezed: ^3.0.4
  json_serializable: ^6.6.2
  bloc_test: ^10.0.0
  mockito: ^5.3.2
  flutter_lints: ^2.0.1

flutter:
  uses-material-design: true
  generate: true
  assets:
    - assets/images/
    - assets/icons/
    - assets/lottie/
    - assets/lang/
  fonts:
    - family: Nunito
      fonts:
        - asset: assets/fonts/Nunito-Bold.ttf
        - asset: assets/fonts/Nunito-ExtraBold.ttf
        - asset: assets/fonts/Nunito-Regular.ttf
          weight: 700

flutter_native_splash:
  color: "#FFFFFF"
  image: assets/images/splash_logo.png
  android_12:
    image: assets/images/splash_logo.png
    color: "#FFFFFF"
"##;
