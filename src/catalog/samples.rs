//! Hand-authored sample forms shown in demo mode

pub const CARDIOLOGY_INTAKE_HTML: &str = r#"<h2>Cardiology Intake Form</h2>
<form>
  <h3>Patient Demographics</h3>
  <label>Full name: <input type="text" name="name"></label><br>
  <label>Date of birth: <input type="date" name="dob"></label><br>
  <label>Phone: <input type="tel" name="phone"></label><br>
  <h3>Reason for Visit</h3>
  <textarea name="reason" rows="3" cols="60"></textarea>
  <h3>Cardiac History</h3>
  <label><input type="checkbox" name="hx_mi"> Heart attack</label>
  <label><input type="checkbox" name="hx_chf"> Heart failure</label>
  <label><input type="checkbox" name="hx_af"> Atrial fibrillation</label>
  <label><input type="checkbox" name="hx_htn"> High blood pressure</label>
  <h3>Current Medications</h3>
  <textarea name="medications" rows="3" cols="60"></textarea>
  <h3>Allergies</h3>
  <input type="text" name="allergies">
  <h3>Family History</h3>
  <textarea name="family_history" rows="2" cols="60"></textarea>
  <h3>Lifestyle</h3>
  <label>Smoking: <select name="smoking"><option>Never</option><option>Former</option><option>Current</option></select></label><br>
  <label>Exercise (days per week): <input type="number" name="exercise" min="0" max="7"></label>
  <h3>Previous Cardiac Tests</h3>
  <label><input type="checkbox" name="test_ecg"> ECG</label>
  <label><input type="checkbox" name="test_echo"> Echocardiogram</label>
  <label><input type="checkbox" name="test_stress"> Stress test</label>
</form>"#;

pub const NUCLEAR_TEST_CONSENT_HTML: &str = r#"<h2>Consent for Nuclear Stress Test</h2>
<form>
  <h3>Purpose</h3>
  <p>A nuclear stress test shows how well blood flows to your heart at rest and during activity.</p>
  <h3>Explanation of the Procedure</h3>
  <p>A small amount of radioactive tracer is injected into a vein. Images of your heart are taken at rest and after exercise or medication that increases your heart rate.</p>
  <h3>Risks</h3>
  <ul>
    <li>Chest discomfort, shortness of breath or dizziness during stress</li>
    <li>Irregular heartbeat</li>
    <li>Low-level radiation exposure</li>
    <li>Rare allergic reaction to the tracer</li>
  </ul>
  <h3>Alternatives</h3>
  <p>Exercise ECG, stress echocardiogram, cardiac MRI or CT angiography.</p>
  <h3>Acknowledgment</h3>
  <label><input type="checkbox" name="ack"> I have read this form, my questions were answered, and I agree to the test.</label>
  <h3>Signatures</h3>
  <label>Patient signature: <input type="text" name="patient_signature"></label>
  <label>Date: <input type="date" name="patient_date"></label><br>
  <label>Witness signature: <input type="text" name="witness_signature"></label>
  <label>Date: <input type="date" name="witness_date"></label>
</form>"#;

pub const ENDOCRINOLOGY_INTAKE_HTML: &str = r#"<h2>Endocrinology New Patient Intake</h2>
<form>
  <h3>Patient Demographics</h3>
  <label>Full name: <input type="text" name="name"></label><br>
  <label>Date of birth: <input type="date" name="dob"></label><br>
  <label>Referring physician: <input type="text" name="referrer"></label>
  <h3>Reason for Visit</h3>
  <textarea name="reason" rows="3" cols="60"></textarea>
  <h3>Endocrine History</h3>
  <label><input type="checkbox" name="hx_diabetes"> Diabetes</label>
  <label><input type="checkbox" name="hx_thyroid"> Thyroid disease</label>
  <label><input type="checkbox" name="hx_adrenal"> Adrenal disorder</label>
  <label><input type="checkbox" name="hx_pituitary"> Pituitary disorder</label>
  <h3>Current Medications</h3>
  <textarea name="medications" rows="3" cols="60"></textarea>
  <h3>Allergies</h3>
  <input type="text" name="allergies">
  <h3>Symptoms Checklist</h3>
  <label><input type="checkbox" name="sx_fatigue"> Fatigue</label>
  <label><input type="checkbox" name="sx_weight"> Weight change</label>
  <label><input type="checkbox" name="sx_thirst"> Excessive thirst</label>
  <label><input type="checkbox" name="sx_temp"> Heat or cold intolerance</label>
  <h3>Lifestyle and Diet</h3>
  <textarea name="diet" rows="2" cols="60"></textarea>
  <h3>Prior Test Results</h3>
  <label>Most recent HbA1c: <input type="text" name="hba1c"></label><br>
  <label>Most recent TSH: <input type="text" name="tsh"></label>
</form>"#;

pub const CARDIOLOGY_INTAKE_LINK: &str =
    "https://forms.example.org/smartdoc/cardiology-intake-form.pdf";
pub const NUCLEAR_TEST_CONSENT_LINK: &str =
    "https://forms.example.org/smartdoc/nuclear-stress-test-consent.pdf";
pub const ENDOCRINOLOGY_INTAKE_LINK: &str =
    "https://forms.example.org/smartdoc/endocrinology-intake-form.pdf";
