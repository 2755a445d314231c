//! Unit tests for the email layer

mod message_tests;
mod mock_mailer_tests;
