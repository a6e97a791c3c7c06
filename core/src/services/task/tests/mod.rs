#[cfg(test)]
mod memory_cache_tests;
#[cfg(test)]
mod planner_tests;
#[cfg(test)]
mod service_tests;
