/*! Integration tests for dotdict.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - dict: Tests for ObjDict path access, the attribute surface and objects
 * - convert: Tests for JSON projection, codecs and file persistence
 * - merge: Tests for the deep merge engine
 * - typed: Tests for typed extraction and date parsing
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotdict=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod convert;
mod dict;
mod helpers;
mod merge;
mod typed;
