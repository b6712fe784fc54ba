//! fedicli library root.
//! Clean Architecture 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::CliAction;
use interface::composition::AppComposition;

/// 파싱된 CLI 동작을 실행한다.
pub async fn run(action: CliAction) -> Result<()> {
    let composition = AppComposition::default();

    match action {
        CliAction::Read(command, options) => {
            composition.read_usecase().execute(command, &options).await
        }
        CliAction::InspectConfig => composition.inspect_config_usecase().execute(),
        CliAction::Diag {
            include_files,
            options,
        } => {
            composition
                .diag_usecase()
                .execute(include_files, &options)
                .await
        }
    }
}
