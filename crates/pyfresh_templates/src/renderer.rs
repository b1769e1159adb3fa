//! Rendering rules for generated project files.
//!
//! Every rule is a pure function of (context, template definition): no
//! I/O, no randomness. Dispatch is a static match over [`FileType`].

use pyfresh_config::TemplateDef;

use crate::context::RenderContext;
use crate::error::TemplateResult;
use crate::file_type::FileType;
use crate::tool::Tool;

/// Renders the literal text content of one project file.
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the content for a file type with the given context.
    pub fn render(
        &self,
        file_type: FileType,
        context: &RenderContext,
        def: &TemplateDef,
    ) -> TemplateResult<String> {
        Ok(match file_type {
            FileType::Gitignore => render_gitignore(),
            FileType::Readme => render_readme(context),
            FileType::Makefile => render_makefile(context.tool),
            FileType::Main => render_main(),
            FileType::CliMain => render_cli_main(),
            FileType::WebMain => render_web_main(),
            FileType::Test => render_test(context, def),
            FileType::Pyproject => render_pyproject(context, def),
        })
    }
}

fn render_gitignore() -> String {
    r#"__pycache__/
*.pyc
*.pyo
*.pyd
.Python
env/
pip-log.txt
pip-delete-this-directory.txt
.tox
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.log
.git
.mypy_cache
.pytest_cache
.hypothesis

.DS_Store
.vscode/
.idea/

.env
.venv/
venv/
ENV/

dist/
build/
*.egg-info/
*.egg

.pdm-python
.pdm-build/
"#
    .to_string()
}

fn render_readme(context: &RenderContext) -> String {
    let install_cmd = context.tool.install_command();
    let run_cmd = context.tool.run_command(&context.package_name);

    format!(
        r#"# {project_name}

{description}

## Installation

```bash
{install_cmd}
```

## Usage

```bash
{run_cmd}
```

## Development

```bash
# Install dependencies
{install_cmd}

# Run tests
make test

# Format code
make lint
```

## License

MIT License
"#,
        project_name = context.project_name,
        description = context.description,
        install_cmd = install_cmd,
        run_cmd = run_cmd,
    )
}

fn render_makefile(tool: Tool) -> String {
    // The two variants differ only in the command prefix.
    let install = tool.install_command();
    let prefix = tool.command_prefix();

    format!(
        "install:\n\
         \t{install}\n\
         \n\
         lint:\n\
         \t{prefix} black src tests\n\
         \t{prefix} mypy src\n\
         \n\
         test:\n\
         \t{prefix} pytest\n\
         \n\
         clean:\n\
         \tfind . -type f -name \"*.pyc\" -delete\n\
         \tfind . -type d -name \"__pycache__\" -delete\n\
         \n\
         .PHONY: install lint test clean\n"
    )
}

fn render_main() -> String {
    r#"def main():
    """Main entry point."""
    print("Hello from main!")


if __name__ == "__main__":
    main()
"#
    .to_string()
}

fn render_cli_main() -> String {
    r#"import click


@click.command()
@click.option('--name', default='World', help='Name to greet.')
def main(name):
    """Simple CLI application."""
    click.echo(f'Hello {name}!')


if __name__ == '__main__':
    main()
"#
    .to_string()
}

fn render_web_main() -> String {
    r#"from fastapi import FastAPI

app = FastAPI()


@app.get("/")
async def root():
    return {"message": "Hello World"}


@app.get("/health")
async def health():
    return {"status": "healthy"}


if __name__ == "__main__":
    import uvicorn
    uvicorn.run(app, host="0.0.0.0", port=8000)
"#
    .to_string()
}

fn render_test(context: &RenderContext, def: &TemplateDef) -> String {
    let package_name = &context.package_name;

    // The test body matches the entry point the template generates.
    let (import_line, test_content) = if def.includes("cli_main") {
        (
            format!("from {package_name}.cli import main"),
            r#"def test_main():
    """Test CLI main function."""
    from click.testing import CliRunner
    runner = CliRunner()
    result = runner.invoke(main, ['--name', 'Test'])
    assert result.exit_code == 0
    assert 'Hello Test!' in result.output"#
                .to_string(),
        )
    } else if def.includes("web_main") {
        (
            format!("from {package_name}.app import app"),
            r#"def test_root():
    """Test web app root endpoint."""
    from fastapi.testclient import TestClient
    client = TestClient(app)
    response = client.get("/")
    assert response.status_code == 200
    assert response.json() == {"message": "Hello World"}"#
                .to_string(),
        )
    } else {
        (
            format!("from {package_name}.main import main"),
            r#"def test_main(capsys):
    """Test main function."""
    main()
    captured = capsys.readouterr()
    assert "Hello" in captured.out"#
                .to_string(),
        )
    };

    format!("{import_line}\n\n\n{test_content}\n")
}

fn render_pyproject(context: &RenderContext, def: &TemplateDef) -> String {
    let dev_deps = match context.tool {
        Tool::Poetry => &def.dev_dependencies.poetry,
        Tool::Uv => &def.dev_dependencies.uv,
    };

    match context.tool {
        Tool::Poetry => render_poetry_pyproject(context, &def.dependencies, dev_deps),
        Tool::Uv => render_uv_pyproject(context, &def.dependencies, dev_deps),
    }
}

fn render_poetry_pyproject(
    context: &RenderContext,
    dependencies: &[String],
    dev_deps: &[String],
) -> String {
    let deps_str = dependencies
        .iter()
        .map(|dep| format!("\"{dep}\""))
        .collect::<Vec<_>>()
        .join("\n");
    // Dev specifiers are keyed by the name before the version pin.
    let dev_deps_str = dev_deps
        .iter()
        .map(|dep| {
            let name = dep.split_once('^').map(|(name, _)| name).unwrap_or(dep);
            format!("{name} = \"{dep}\"")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"[tool.poetry]
name = "{package_name}"
version = "0.1.0"
description = "{description}"
authors = ["{author} <{email}>"]
readme = "README.md"
packages = [{{include = "{package_name}", from = "src"}}]

[tool.poetry.dependencies]
python = "{python_version}"
{deps_str}

[tool.poetry.group.dev.dependencies]
{dev_deps_str}

[build-system]
requires = ["poetry-core>=1.0.0"]
build-backend = "poetry.core.masonry.api"

[tool.black]
line-length = 88
target-version = ['py311']

[tool.mypy]
python_version = "3.11"
warn_return_any = true
warn_unused_configs = true
"#,
        package_name = context.package_name,
        description = context.description,
        author = context.author,
        email = context.email,
        python_version = context.python_version,
        deps_str = deps_str,
        dev_deps_str = dev_deps_str,
    )
}

fn render_uv_pyproject(
    context: &RenderContext,
    dependencies: &[String],
    dev_deps: &[String],
) -> String {
    let deps_str = dependencies
        .iter()
        .map(|dep| format!("    \"{dep}\","))
        .collect::<Vec<_>>()
        .join("\n");
    let dev_deps_str = dev_deps
        .iter()
        .map(|dep| format!("    \"{dep}\","))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"[project]
name = "{package_name}"
version = "0.1.0"
description = "{description}"
authors = [
    {{name = "{author}", email = "{email}"}}
]
readme = "README.md"
requires-python = "{python_version}"
dependencies = [
{deps_str}
]

[project.optional-dependencies]
dev = [
{dev_deps_str}
]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.uv]
dev-dependencies = [
{dev_deps_str}
]

[tool.black]
line-length = 88
target-version = ['py311']

[tool.mypy]
python_version = "3.11"
warn_return_any = true
warn_unused_configs = true
"#,
        package_name = context.package_name,
        description = context.description,
        author = context.author,
        email = context.email,
        python_version = context.python_version,
        deps_str = deps_str,
        dev_deps_str = dev_deps_str,
    )
}
