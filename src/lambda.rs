use inflation_skill::config::lambda::LambdaConfig;
use inflation_skill::utils::{logger, validation::Validate};
use inflation_skill::{Skill, SkillRequest, SkillResponse, SystemClock};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    skill: &Skill<SystemClock>,
    event: LambdaEvent<SkillRequest>,
) -> Result<SkillResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling skill request");

    let response = skill.handle(&event.payload)?;

    tracing::debug!(
        speech = ?response.speech_text(),
        "Skill request completed"
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env();
    logger::init_lambda_logger(&config.log_level);

    // 冷啟動時載入一次 CPI 資料
    config.validate()?;
    let skill = Skill::from_config(&config, SystemClock)?;
    let skill = &skill;

    run(service_fn(move |event: LambdaEvent<SkillRequest>| async move {
        function_handler(skill, event).await
    }))
    .await
}
