//! The demo page: the measurement metrics, citation references and
//! checker form of the site this runtime animates.

use flourish_core::{CounterElement, PageDocument, ReferenceEntry, RingElement};

pub fn demo_document() -> PageDocument {
    PageDocument {
        counters: vec![
            metric("looping-subnets", "2960000"),
            metric("amplifying-subnets", "118000"),
            metric("max-amplification", "4224"),
            metric("router-ips", "9400000"),
            metric("hitlist-overlap", "418000"),
            percentage_metric("overlap-percentage", "83.5"),
        ],
        rings: vec![RingElement {
            label: "overlap-ring".to_string(),
            percentage: Some("83.5".to_string()),
            radius: 52.0,
        }],
        references: vec![
            reference(
                "loops2024",
                "@inproceedings{loops2024,\n  title = {Persistent Routing Loops in the Wild},\n  year = {2024},\n}",
            ),
            reference(
                "amplification2023",
                "@article{amplification2023,\n  title = {Loop Amplification as a DDoS Vector},\n  year = {2023},\n}",
            ),
        ],
        lookup_form: true,
    }
}

fn metric(label: &str, target: &str) -> CounterElement {
    CounterElement {
        label: label.to_string(),
        target: Some(target.to_string()),
        percentage: false,
        text: "0".to_string(),
    }
}

fn percentage_metric(label: &str, target: &str) -> CounterElement {
    CounterElement {
        label: label.to_string(),
        target: Some(target.to_string()),
        percentage: true,
        text: "0.00%".to_string(),
    }
}

fn reference(key: &str, snippet: &str) -> ReferenceEntry {
    ReferenceEntry {
        key: key.to_string(),
        snippet: Some(snippet.to_string()),
        button_markup: "Copy BibTeX".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flourish_core::PageState;

    #[test]
    fn every_demo_target_parses() {
        let state = PageState::attach(&demo_document());
        let view = state.view();

        // A skipped counter would keep its placeholder text forever; all
        // demo targets must animate.
        let (state, _) = flourish_core::update(state, flourish_core::Msg::Frame { now: 0.0 });
        let (state, _) = flourish_core::update(state, flourish_core::Msg::Frame { now: 5000.0 });
        for counter in state.view().counters {
            assert_ne!(counter.text, "");
        }
        assert_eq!(view.rings.len(), 1);
        assert!(view.lookup.is_some());
    }

    #[test]
    fn demo_counters_finish_on_their_targets() {
        let state = PageState::attach(&demo_document());
        let (state, _) = flourish_core::update(state, flourish_core::Msg::Frame { now: 0.0 });
        // Past the last stagger delay plus the full duration.
        let (state, _) = flourish_core::update(state, flourish_core::Msg::Frame { now: 5000.0 });

        let view = state.view();
        assert_eq!(view.counters[0].text, "3M");
        assert_eq!(view.counters[1].text, "118k");
        assert_eq!(view.counters[2].text, "4,224");
        assert_eq!(view.counters[3].text, "9.4M");
        assert_eq!(view.counters[4].text, "418k");
        assert_eq!(view.counters[5].text, "83.50%");
    }
}
