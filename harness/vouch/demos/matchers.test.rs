use std::time::Duration;

use vouch::prelude::*;

pub fn register(h: &mut Harness) {
    h.describe("Matchers", |suite| {
        suite.it("compares by identity and by structure", || -> Result<(), TestError> {
            expect(5).to_be(5)?;
            expect(5).not().to_be(6)?;
            expect(vec![1, 2, 3]).to_equal(vec![1, 2, 3])?;
            expect(vec![1, 2]).not().to_equal(vec![1, 2, 3])?;
            Ok(())
        });

        suite.it("checks truthiness and null", || -> Result<(), TestError> {
            expect("text").to_be_truthy()?;
            expect(0).to_be_falsy()?;
            expect(Value::Null).to_be_null()?;
            expect(Option::<i64>::None).to_be_null()?;
            Ok(())
        });

        suite.it("looks inside strings, lists and maps", || -> Result<(), TestError> {
            expect("haystack").to_contain("hay")?;
            expect(vec![1, 2, 3]).to_contain(2)?;
            let point = Value::map_from([("x", 1), ("y", 2)]);
            expect(point.clone()).object_containing(Value::map_from([("x", 1)]))?;
            expect(point).to_be_instance_of(Kind::Map)?;
            Ok(())
        });
    });

    h.describe("Spies", |suite| {
        suite.it("records every call", || -> Result<(), TestError> {
            let increment = mock_fn(|x: i64| x + 1);
            expect(increment.call(3)).to_be(4)?;
            expect(increment.call(5)).to_be(6)?;
            expect(increment.calls_as_values()).to_equal(vec![3, 5])?;
            Ok(())
        });

        suite
            .each([(1, 2, 3), (2, 3, 5)])
            .it("%s + %s = %s", |(a, b, sum): (i64, i64, i64)| {
                let add = mock_fn(|(a, b): (i64, i64)| a + b);
                expect(add.call((a, b))).to_be(sum)?;
                expect(add.call_count()).to_be(1)
            });
    });

    h.it("resolves later", || {
        defer(async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            expect("settled").to_equal("settled")
        })
    });
}
