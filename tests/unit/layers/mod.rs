use super::*;

struct Fixed(Option<f64>, Option<f64>);

impl Layer for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn start_time(&self) -> Option<f64> {
        self.0
    }

    fn end_time(&self) -> Option<f64> {
        self.1
    }

    fn plot(&self, _: &mut Scene, _: &LayerContext<'_>, _: &Derived) -> CalendarResult<()> {
        Ok(())
    }
}

fn boxed(layers: Vec<Fixed>) -> Vec<Box<dyn Layer>> {
    layers
        .into_iter()
        .map(|l| Box::new(l) as Box<dyn Layer>)
        .collect()
}

#[test]
fn union_of_declared_extents() {
    let layers = boxed(vec![
        Fixed(Some(4.0), Some(8.0)),
        Fixed(None, None),
        Fixed(Some(2.0), Some(6.0)),
    ]);
    assert_eq!(global_range(&layers).unwrap(), HourRange::new(2.0, 8.0).unwrap());
}

#[test]
fn full_day_without_opinions() {
    assert_eq!(global_range(&[]).unwrap(), HourRange::FULL_DAY);
    let layers = boxed(vec![Fixed(None, None)]);
    assert_eq!(global_range(&layers).unwrap(), HourRange::FULL_DAY);
}

#[test]
fn one_sided_opinions_combine_with_defaults() {
    let layers = boxed(vec![Fixed(Some(3.5), None)]);
    assert_eq!(global_range(&layers).unwrap(), HourRange::new(3.5, 24.0).unwrap());
}

#[test]
fn default_footer_capability_is_absent() {
    assert!(Fixed(None, None).footer().is_none());
}
