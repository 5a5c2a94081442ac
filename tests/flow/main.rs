//! End-to-end flow tests: scripted transport, in-memory storage, and
//! recording navigation/frame fixtures.

mod helpers;

mod login;
