#[cfg(test)]
mod common;

#[cfg(test)]
mod contact_submit_tests;

#[cfg(test)]
mod contact_validation_tests;


#[cfg(test)]
mod rate_limit_tests;
