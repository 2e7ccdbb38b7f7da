//! Static page that renders the dashboard in the browser.
//!
//! The page loads plotly.js, builds the slider from `/_dash-layout` and posts
//! every slider change to `/_dash-update-component`.

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 20px; }
  #slider-box { margin: 10px 40px; }
  #marks { display: flex; justify-content: space-between; font-size: 12px; }
</style>
</head>
<body>
<div id="graph"></div>
<div id="slider-box">
  <input id="slider" type="range" min="0" step="1" style="width: 100%">
  <div id="marks"></div>
</div>
<script>
async function main() {
  const res = await fetch("/_dash-layout");
  const body = await res.json();
  const [graph, slider] = body.layout.children;
  const props = slider.props;
  // Stops sorted for display; the input walks indices so it only rests on observed values.
  const stops = props.stops.slice().sort((a, b) => a - b);
  const input = document.getElementById("slider");
  input.max = stops.length - 1;
  input.value = Math.max(0, stops.indexOf(props.value));
  document.getElementById("marks").innerHTML =
    stops.map(s => "<span>" + props.marks[String(s)] + "</span>").join("");

  async function update() {
    const value = stops[Number(input.value)];
    const r = await fetch("/_dash-update-component", {
      method: "POST",
      headers: {"Content-Type": "application/json"},
      body: JSON.stringify({
        output: graph.props.id + ".figure",
        inputs: [{id: props.id, property: "value", value: value}],
      }),
    });
    const out = await r.json();
    const figure = out.response[graph.props.id].figure;
    Plotly.react("graph", figure.data, figure.layout);
  }

  input.addEventListener("input", update);
  update();
}
main();
</script>
</body>
</html>
"#;

/// Renders the page with `title` HTML-escaped into the `<title>` element.
pub fn render(title: &str) -> String {
    TEMPLATE.replace("{{title}}", &escape_html(title))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
