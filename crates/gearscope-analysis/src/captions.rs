//! Static guidance text attached to each comparison chart
//!
//! Captions are deterministic templates over the fault label; they carry no
//! computed insight.

/// Label used for the uploaded recording in legends and captions
pub fn fault_label(dataset_label: &str) -> String {
    format!("{dataset_label} gear fault")
}

pub fn raw_sensor1_caption(fault_label: &str) -> String {
    format!(
        "This chart compares the sensor1 (x-axis) vibration signals from a no-fault gear \
         to the {fault_label}. Notice the amplitude and frequency changes to gauge \
         whether there’s an anomaly. A stable baseline with few spikes suggests a healthy gear. \
         Significant differences from the no-fault pattern may hint at mechanical faults."
    )
}

pub fn raw_sensor2_caption(fault_label: &str) -> String {
    format!(
        "This chart compares the sensor2 (y-axis) vibration signals of a no-fault gear \
         versus the {fault_label}. Looking at fluctuations can help identify abnormal resonance or wear. \
         If the amplitude is consistently higher than the no-fault baseline, it may indicate gear damage. \
         Trends in this axis often complement sensor1 findings for a fuller picture."
    )
}

pub fn smoothed_sensor1_caption(fault_label: &str) -> String {
    format!(
        "This graph displays a rolling mean of sensor1 data, smoothing out short-term noise \
         to highlight broader trends. A stable rolling mean often indicates consistent operation, \
         while shifts in the {fault_label} line could suggest growing wear. \
         Comparing both lines helps spot subtle deviations that raw signals might conceal."
    )
}
