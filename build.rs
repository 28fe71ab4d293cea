fn main() {
    // Re-exports the esp-idf-sys build environment for device builds.
    // On host builds nothing is propagated, so this is a no-op.
    embuild::espidf::sysenv::output();
}
