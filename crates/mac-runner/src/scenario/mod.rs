#[allow(clippy::module_inception)]
mod scenario;
mod step;

pub(crate) use {
    scenario::Scenario,
    step::Step,
};
