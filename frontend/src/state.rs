//! Reducer wrappers around the state machines from `shared`, so async
//! completions always apply to the latest state rather than a stale copy
//! captured when the request started.

use shared::workflow::PreprocessState;
use shared::{ApiError, TrainEvent, TrainingSession, ViewState};
use std::rc::Rc;
use yew::prelude::*;

pub enum ViewAction<T> {
    Begin,
    /// Like `Begin`, but also drops what is on display.
    Restart,
    Done(Result<T, ApiError>),
    Reject(String),
}

#[derive(Clone)]
pub struct ViewModel<T> {
    pub state: ViewState<T>,
    /// Whether a failed request also drops what is currently displayed.
    pub clear_on_error: bool,
}

impl<T> ViewModel<T> {
    pub fn new(clear_on_error: bool) -> Self {
        Self {
            state: ViewState::default(),
            clear_on_error,
        }
    }
}

impl<T: Clone + 'static> Reducible for ViewModel<T> {
    type Action = ViewAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Begin => next.state.begin(),
            ViewAction::Restart => next.state.restart(),
            ViewAction::Done(outcome) => next.state.finish(outcome, next.clear_on_error),
            ViewAction::Reject(message) => next.state.reject(message),
        }
        Rc::new(next)
    }
}

pub enum TrainingAction {
    Start,
    Event(TrainEvent),
    ConnectionLost,
}

#[derive(Clone, Default)]
pub struct TrainingModel(pub TrainingSession);

impl Reducible for TrainingModel {
    type Action = TrainingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TrainingAction::Start => next.0.start(),
            TrainingAction::Event(event) => {
                next.0.apply(event);
            }
            TrainingAction::ConnectionLost => next.0.connection_lost(),
        }
        Rc::new(next)
    }
}

pub enum PreprocessAction {
    Begin,
    Done(Result<(), ApiError>),
    Reject(String),
    Reset,
}

#[derive(Clone, Default)]
pub struct PreprocessModel(pub PreprocessState);

impl Reducible for PreprocessModel {
    type Action = PreprocessAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PreprocessAction::Begin => next.0.begin(),
            PreprocessAction::Done(Ok(())) => next.0.record_success(),
            PreprocessAction::Done(Err(err)) => next.0.record_failure(err.to_string()),
            PreprocessAction::Reject(message) => next.0.record_failure(message),
            PreprocessAction::Reset => next.0.reset(),
        }
        Rc::new(next)
    }
}
