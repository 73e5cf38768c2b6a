use crate::core::inflation::{round_to_cents, ConversionError, InflationAdjuster};
use crate::domain::model::{parse_number, ConversionInput};
use crate::domain::ports::YearProvider;
use crate::skill::envelope::{Intent, SkillResponse};
use crate::skill::speech;
use std::collections::HashMap;

pub const CURRENT_TO_YEAR: &str = "CurrentToYear";
pub const YEAR_TO_YEAR: &str = "YearToYear";
pub const YEAR_TO_CURRENT: &str = "YearToCurrent";
pub const NEED_VALID_YEAR: &str = "NeedValidYear";
pub const NEED_VALID_VALUE: &str = "NeedValidValue";
pub const HELP: &str = "AMAZON.HelpIntent";
pub const STOP: &str = "AMAZON.StopIntent";
pub const CANCEL: &str = "AMAZON.CancelIntent";

/// Slot text pulled out of an intent. Values are unparsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentSlots<'a> {
    pub year: Option<&'a str>,
    pub in_year: Option<&'a str>,
    pub compare_year: Option<&'a str>,
    pub value: Option<&'a str>,
}

impl<'a> IntentSlots<'a> {
    pub fn from_intent(intent: &'a Intent) -> Self {
        Self {
            year: intent.slot("year"),
            in_year: intent.slot("inyear"),
            compare_year: intent.slot("compareyear"),
            value: intent.slot("value"),
        }
    }
}

pub type IntentHandler<C> =
    fn(&InflationAdjuster<C>, &IntentSlots<'_>) -> Result<SkillResponse, ConversionError>;

/// Maps intent names to handlers.
pub struct IntentRouter<C: YearProvider> {
    handlers: HashMap<&'static str, IntentHandler<C>>,
}

impl<C: YearProvider> IntentRouter<C> {
    pub fn new() -> Self {
        let mut router = Self {
            handlers: HashMap::new(),
        };
        router.register(CURRENT_TO_YEAR, current_to_year::<C>);
        router.register(YEAR_TO_YEAR, year_to_year::<C>);
        router.register(YEAR_TO_CURRENT, year_to_current::<C>);
        router.register(NEED_VALID_YEAR, need_valid_year::<C>);
        router.register(NEED_VALID_VALUE, need_valid_value::<C>);
        router.register(HELP, help::<C>);
        router.register(STOP, stop::<C>);
        router.register(CANCEL, stop::<C>);
        router
    }

    pub fn register(&mut self, name: &'static str, handler: IntentHandler<C>) {
        self.handlers.insert(name, handler);
    }

    pub fn route(&self, adjuster: &InflationAdjuster<C>, intent: &Intent) -> SkillResponse {
        let slots = IntentSlots::from_intent(intent);

        let Some(handler) = self.handlers.get(intent.name.as_str()) else {
            tracing::warn!(intent = %intent.name, "no handler registered for intent");
            return SkillResponse::tell(speech::unknown_intent());
        };

        match handler(adjuster, &slots) {
            Ok(response) => response,
            Err(ConversionError::InvalidYear { .. }) => {
                tracing::info!(intent = %intent.name, ?slots, "invalid year");
                self.follow_up(NEED_VALID_YEAR, adjuster, &slots)
            }
            Err(ConversionError::InvalidAmount) => {
                tracing::info!(intent = %intent.name, ?slots, "invalid amount");
                self.follow_up(NEED_VALID_VALUE, adjuster, &slots)
            }
            Err(ConversionError::IndexUnavailable { year }) => {
                SkillResponse::tell(speech::data_unavailable(year))
            }
        }
    }

    fn follow_up(
        &self,
        name: &str,
        adjuster: &InflationAdjuster<C>,
        slots: &IntentSlots<'_>,
    ) -> SkillResponse {
        match self.handlers.get(name).map(|handler| handler(adjuster, slots)) {
            Some(Ok(response)) => response,
            _ => SkillResponse::tell(speech::unknown_intent()),
        }
    }
}

impl<C: YearProvider> Default for IntentRouter<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn current_year_input<C: YearProvider>(adjuster: &InflationAdjuster<C>) -> Option<f64> {
    Some(f64::from(adjuster.current_year()))
}

fn current_to_year<C: YearProvider>(
    adjuster: &InflationAdjuster<C>,
    slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    let result = adjuster.convert_input(&ConversionInput {
        source_year: current_year_input(adjuster),
        target_year: slots.year.and_then(parse_number),
        amount: slots.value.and_then(parse_number),
    })?;
    Ok(SkillResponse::tell(speech::current_to_year(
        round_to_cents(result.request.amount),
        result.adjusted,
        result.request.target_year,
    )))
}

fn year_to_year<C: YearProvider>(
    adjuster: &InflationAdjuster<C>,
    slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    let result = adjuster.convert_input(&ConversionInput::from_text(
        slots.in_year,
        slots.compare_year,
        slots.value,
    ))?;
    Ok(SkillResponse::tell(speech::year_to_year(
        round_to_cents(result.request.amount),
        result.adjusted,
        result.request.source_year,
        result.request.target_year,
    )))
}

fn year_to_current<C: YearProvider>(
    adjuster: &InflationAdjuster<C>,
    slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    let result = adjuster.convert_input(&ConversionInput {
        source_year: slots.year.and_then(parse_number),
        target_year: current_year_input(adjuster),
        amount: slots.value.and_then(parse_number),
    })?;
    Ok(SkillResponse::tell(speech::year_to_current(
        round_to_cents(result.request.amount),
        result.adjusted,
        result.request.source_year,
    )))
}

fn need_valid_year<C: YearProvider>(
    adjuster: &InflationAdjuster<C>,
    _slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    Ok(SkillResponse::tell(speech::need_valid_year(
        adjuster.current_year(),
    )))
}

fn need_valid_value<C: YearProvider>(
    _adjuster: &InflationAdjuster<C>,
    _slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    Ok(SkillResponse::tell(speech::need_valid_value()))
}

fn help<C: YearProvider>(
    adjuster: &InflationAdjuster<C>,
    _slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    Ok(SkillResponse::ask(speech::help(adjuster.current_year())))
}

fn stop<C: YearProvider>(
    _adjuster: &InflationAdjuster<C>,
    _slots: &IntentSlots<'_>,
) -> Result<SkillResponse, ConversionError> {
    Ok(SkillResponse::tell(speech::goodbye()))
}
