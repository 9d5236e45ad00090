use envelope::{live_nodes, BoundedArray, Error, Expr, Fleet, Truck, VehicleSurrogate};

fn sample() -> Expr {
    Expr::binary("*", Expr::unary("-", 5), Expr::binary("+", 3, 4))
}

#[test]
fn squaring_shares_subtrees() {
    let before = live_nodes();
    let mut t = sample();
    for _ in 0..10 {
        let squared = Expr::binary("*", t.clone(), t.clone());
        t.assign(&squared);
    }
    // One new node per squaring
    assert_eq!(live_nodes(), before + 6 + 10);
    let text = t.text().unwrap();
    assert_eq!(text.matches("(-5)").count(), 1 << 10);
    drop(t);
    assert_eq!(live_nodes(), before);
}

#[test]
fn original_driver_output() {
    let mut t = sample();
    t = Expr::binary("*", t.clone(), t);
    assert_eq!(
        t.text().unwrap(),
        "(((-5) * (3 + 4)) * ((-5) * (3 + 4)))"
    );
}

#[test]
fn handles_render_into_any_sink() {
    use std::fmt::Write;

    let mut out = String::from("t = ");
    sample().render(&mut out).unwrap();
    let sink: &mut dyn Write = &mut out;
    Expr::int(1).render(sink).unwrap();
    assert_eq!(out, "t = ((-5) * (3 + 4))1");
}

#[test]
fn errors_display() {
    assert_eq!(
        Expr::default().text().unwrap_err().to_string(),
        "Cannot render an unbound expression"
    );
    assert_eq!(
        BoundedArray::<i32>::new(2).get(5).unwrap_err().to_string(),
        "Array subscript 5 out of range for length 2"
    );
    assert_eq!(
        VehicleSurrogate::default().weight(),
        Err(Error::EmptySurrogate)
    );
}

#[test]
fn fleet_is_persistent() {
    let one = Fleet::new().with(Truck {
        tare: 1.0,
        cargo: 2.0,
    });
    let two = one.with(VehicleSurrogate::from(Truck {
        tare: 3.0,
        cargo: 4.0,
    }));
    assert_eq!(one.len(), 1);
    assert_eq!(two.len(), 2);
    assert_eq!(two.total_weight(), Ok(10.0));
}
