use colored::Colorize;
use envcli_config::{HTTP_PROXY, HTTPS_PROXY, PropertyStore};
use envcli_container::{DockerCli, ExecRequest, Executor, ProxySettings};
use envcli_core::{
    ConfigurationResolver, EnvError, project_or_working_directory,
    relative_path_to_working_directory,
};
use std::path::PathBuf;

/// コマンドを解決してコンテナで実行し、終了コードを返す
pub async fn handle(
    command: String,
    args: Vec<String>,
    includes: Vec<PathBuf>,
) -> anyhow::Result<i32> {
    let command_line = std::iter::once(command.as_str())
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!(command = %command, command_line = %command_line, "Command run in container");

    let current_dir = std::env::current_dir()?;
    let resolver = ConfigurationResolver::from_environment()?;

    let target = match resolver.resolve(&command, &current_dir, &includes) {
        Ok(target) => target,
        Err(EnvError::CommandNotFound(name)) => {
            eprintln!(
                "{}",
                format!("コマンド [{}] に対応する設定が見つかりません", name).red()
            );
            eprintln!(
                "{}",
                "ヒント: .envcli.yml の images[].provides にコマンドを追加してください".yellow()
            );
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    let project_dir = project_or_working_directory(&current_dir);
    let working_subpath = relative_path_to_working_directory(&project_dir, &current_dir);

    let properties = PropertyStore::open_default()?.load()?;
    let proxy = ProxySettings::new(
        properties.value_or(HTTP_PROXY, ""),
        properties.value_or(HTTPS_PROXY, ""),
    );

    let request = ExecRequest {
        image: target.image.clone(),
        tag: target.tag.clone(),
        shell: target.shell.clone(),
        command_line,
        host_directory: project_dir,
        container_directory: target.directory.clone(),
        working_subpath,
        proxy,
    };

    tracing::info!(
        image = %request.image_ref(),
        scope = %target.scope,
        "Redirecting command to Docker container"
    );
    println!(
        "{}",
        format!("コンテナ [{}] でコマンドを実行します", request.image_ref()).green()
    );

    let exit_code = DockerCli::new().execute(&request).await?;
    Ok(exit_code)
}
