//! Fixture trees built in temporary directories.

use std::fs;

use tempfile::TempDir;

/// Standard test tree.
///
/// ```text
/// root/
/// ├── docs/
/// │   └── guide.md
/// ├── src/
/// │   ├── api/
/// │   │   ├── auth.py
/// │   │   └── user.py
/// │   └── models/
/// │       └── user.py
/// ├── tests/
/// │   └── test_user.py
/// └── README.md
/// ```
pub fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("docs/guide.md"), "guide").unwrap();
    fs::create_dir_all(root.join("src/api")).unwrap();
    fs::write(root.join("src/api/auth.py"), "auth").unwrap();
    fs::write(root.join("src/api/user.py"), "user").unwrap();
    fs::create_dir_all(root.join("src/models")).unwrap();
    fs::write(root.join("src/models/user.py"), "user").unwrap();
    fs::create_dir_all(root.join("tests")).unwrap();
    fs::write(root.join("tests/test_user.py"), "test").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();
    dir
}

/// Tree with noise directories.
///
/// ```text
/// root/
/// ├── node_modules/pkg/index.js
/// ├── src/
/// │   ├── app.py
/// │   └── __pycache__/app.cpython-313.pyc
/// ├── .venv/bin/activate
/// └── README.md
/// ```
pub fn noisy_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "js").unwrap();
    fs::create_dir_all(root.join("src/__pycache__")).unwrap();
    fs::write(root.join("src/app.py"), "app").unwrap();
    fs::write(root.join("src/__pycache__/app.cpython-313.pyc"), [0u8]).unwrap();
    fs::create_dir_all(root.join(".venv/bin")).unwrap();
    fs::write(root.join(".venv/bin/activate"), "activate").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();
    dir
}

/// Tree with a root `.gitignore` of `*.pyc`, `node_modules/` and `dist/`.
///
/// ```text
/// root/
/// ├── .gitignore
/// ├── dist/bundle.js
/// ├── node_modules/pkg/index.js
/// ├── src/
/// │   ├── app.py
/// │   └── app.pyc
/// └── README.md
/// ```
pub fn gitignore_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join(".gitignore"), "*.pyc\nnode_modules/\ndist/\n").unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("dist/bundle.js"), "bundle").unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "js").unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/app.py"), "app").unwrap();
    fs::write(root.join("src/app.pyc"), [0u8]).unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();
    dir
}
