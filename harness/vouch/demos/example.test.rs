use vouch::prelude::*;

pub fn register(h: &mut Harness) {
    h.describe("Test each", |suite| {
        suite
            .each([[1, 2], [4, 5]])
            .it("value %s is lower than %s", |[a, b]| {
                assert!(a < b);
            });
    });

    h.it("Bla blah", || expect(true).to_be_truthy());

    h.describe("Suite name for blah", |suite| {
        suite.it("Bla blah", || expect(true).to_be_truthy());
        suite.it("Hey ho", || expect(true).to_be_truthy());
    });
}
