mod apps;
mod defaults;
mod retry;
mod support;
