//! Student Report screen: static session report beside the handout image.

use yew::prelude::*;

use crate::components::PageHeader;
use crate::utils;
use crate::Route;

#[function_component(ReportPage)]
pub fn report_page() -> Html {
    let handout_src = utils::api_url("/handouts/dyspnee-image");

    html! {
        <div class="page report-page">
            <PageHeader title="Student Report" current={Route::Report} />

            <main class="two-columns">
                <section class="report-column">
                    <h4>{ "Final Session Report: Clinical Reasoning for Chronic Dyspnea" }</h4>
                    <div class="report-body">
                        <h5>{ "Summary of Student's Reasoning:" }</h5>
                        <p>
                            { "The student's reasoning progression was limited in this session. \
                               When prompted to summarize key findings expected in a patient with \
                               chronic dyspnea (Step 1: Interpretive summary). Subsequently, when \
                               asked to provide 3-5 possible differential diagnoses with reasoning \
                               (Step 2: Differential diagnosis), the student ultimately indicated \
                               \"i dont know,\" suggesting an inability to formulate a differential \
                               at that stage." }
                        </p>

                        <h5>{ "Student's Strengths:" }</h5>
                        <p>
                            { "The student correctly identified the patient's chief complaint as \
                               \"chronic dyspnea\" and acknowledged the referral source. This \
                               demonstrates a fundamental ability to register the primary \
                               presenting problem and its context." }
                        </p>

                        <h5>{ "Student's Weaknesses:" }</h5>
                        <p>
                            { "Inability to Formulate Differential Diagnosis (Step 2): The student \
                               was unable to generate a list of possible diagnoses or articulate \
                               reasoning for them, even at a high level. This indicates a \
                               difficulty in connecting the presenting symptom (chronic dyspnea) \
                               to its broad etiological categories." }
                        </p>

                        <h5>{ "For Step 2: Differential Diagnosis for Chronic Dyspnea" }</h5>
                        <p>
                            { "Without specific patient data beyond \"chronic dyspnea,\" a broad \
                               differential built from the major categories is expected. The \
                               factual database provides key etiological categories [30-37]:" }
                        </p>
                        <ul>
                            <li>
                                <strong>{ "Chronic Lung Diseases: " }</strong>
                                { "Obstructive: COPD (smoker, non-reversible obstruction), Asthma \
                                   (young, atopic, reversible obstruction, variable symptoms) [30]. \
                                   Restrictive: Ventilatory pump impairment (e.g., Chest wall \
                                   hypoventilation like kyphoscoliosis, severe obesity; \
                                   Neuromuscular diseases) or Diffuse Interstitial Lung Diseases \
                                   (dry cough, crackles) [31]." }
                            </li>
                            <li>
                                <strong>{ "Chronic Heart Diseases: " }</strong>
                                { "Heart Failure (ischemic, hypertrophic, valvulopathy, crackles), \
                                   Constrictive Pericarditis, Arrhythmias [32]." }
                            </li>
                            <li>
                                <strong>{ "Pulmonary Hypertension: " }</strong>
                                { "Pulmonary Arterial Hypertension (PAH), Post-embolic Pulmonary \
                                   Hypertension [33, 34]." }
                            </li>
                            <li>
                                <strong>{ "Oxygen Transport Abnormalities: " }</strong>
                                { "Chronic Anemia, Carbon Monoxide Poisoning [35]." }
                            </li>
                            <li>
                                <strong>{ "Psychogenic Chronic Dyspnea: " }</strong>
                                { "(Diagnosis of exclusion, anxiety context) [36]." }
                            </li>
                        </ul>
                        <p>
                            { "The student needs to develop the skill of systematically \
                               approaching a chief complaint by first fully characterizing it and \
                               then brainstorming differential diagnoses based on common \
                               etiologies found in the knowledge base, even in the absence of \
                               detailed patient information." }
                        </p>
                    </div>
                </section>

                <section class="handout-column">
                    <img src={handout_src} alt="Dyspnea handout" class="handout-image" />
                </section>
            </main>
        </div>
    }
}
