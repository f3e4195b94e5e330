#[cfg(test)]
mod query;
#[cfg(test)]
mod util;
