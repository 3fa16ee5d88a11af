//! Common constants used throughout the ngforge application.

/// Angular CLI major version the scaffold is pinned to. The rewritten
/// application sources target this version's file layout.
pub const ANGULAR_CLI_VERSION: &str = "19";

/// Node.js major version rendered into Docker and CI templates.
pub const NODE_VERSION: &str = "20";

/// Tools that must resolve on `PATH` before anything is created.
pub const REQUIRED_TOOLS: [&str; 2] = ["npx", "npm"];

/// Environment variable overriding the template root.
pub const TEMPLATES_ENV: &str = "NGFORGE_TEMPLATES";

/// Environment variable selecting strict placeholder substitution.
pub const STRICT_TEMPLATES_ENV: &str = "NGFORGE_STRICT_TEMPLATES";

/// Name of the bundled template directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Exact `scripts` section written into `package.json`.
pub const MANIFEST_SCRIPTS: [(&str, &str); 6] = [
    ("start", "ng serve"),
    ("build", "ng build"),
    ("watch", "ng build --watch --configuration development"),
    ("test", "ng test"),
    ("lint", "ng lint"),
    ("format", "prettier --write \"src/**/*.{ts,html,scss,json}\""),
];

/// Directory served as static assets, and its output location.
pub const ASSETS_INPUT: &str = "src/assets";
pub const ASSETS_OUTPUT: &str = "assets";

/// Global stylesheet generated by `ng new --style=scss`.
pub const STYLES_FILE: &str = "src/styles.scss";

/// Optional UI styling library packages. PrimeNG follows Angular's major.
pub const UI_LIBRARY_PACKAGES: [&str; 3] = ["primeng@19", "primeicons@7", "primeflex@3"];

/// Angular ESLint schematics, pinned to the Angular CLI major.
pub const ESLINT_SCHEMATICS: &str = "@angular-eslint/schematics@19";

/// Lint and format tooling installed as dev dependencies.
pub const FORMAT_PACKAGES: [&str; 3] = [
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-prettier",
];

/// Internationalization packages. Major 16 supports Angular 19 and still
/// ships the `TranslateHttpLoader(http, prefix, suffix)` constructor.
pub const I18N_PACKAGES: [&str; 2] = ["@ngx-translate/core@16", "@ngx-translate/http-loader@16"];

/// Marker file keeping otherwise-empty directories tracked by git.
pub const MARKER_FILE: &str = ".gitkeep";

/// Declarations directory and its stub file.
pub const DECLARATIONS_DIR: &str = "src/app/shared/types";
pub const DECLARATIONS_FILE: &str = "index.d.ts";
pub const DECLARATIONS_STUB: &str = "// Shared type declarations for the application.\n";

/// Modular source layout materialized under the project root.
pub const FOLDER_STRUCTURE: [&str; 14] = [
    "src/app/core",
    "src/app/core/guards",
    "src/app/core/interceptors",
    "src/app/core/services",
    "src/app/core/models",
    "src/app/shared",
    "src/app/shared/components",
    "src/app/shared/directives",
    "src/app/shared/pipes",
    DECLARATIONS_DIR,
    "src/app/features",
    "src/app/layout",
    "src/assets",
    "src/assets/images",
];
