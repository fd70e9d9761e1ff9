//! The dashboard document.
//!
//! One static page, parameterized only by the channel id and the in-use
//! threshold. The embedded script is the browser-side poller: it fetches
//! `/api/data` on load and every 30 seconds, classifies each slot against
//! the same threshold constant the server rendered in, and repaints the
//! four cards. The script talks to the server only through that JSON
//! endpoint.

/// Substitute the two configuration values into the template.
pub fn render_page(channel_id: u64, threshold: f64) -> String {
    PAGE_TEMPLATE
        .replace("__CHANNEL_ID__", &channel_id.to_string())
        .replace("__THRESHOLD__", &threshold.to_string())
}

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Laundry status - channel __CHANNEL_ID__</title>
<style>
  :root{ --ok:#2ecc71; --warn:#FF4C4C; --base:#f3f4f6; --fg:#111; --gap:12px; --topbar-h:48px; }
  *{box-sizing:border-box;}
  body{
    margin:0; padding:12px;
    font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;
    background:#fff; color:var(--fg);
  }
  .wrap{max-width:680px;margin:0 auto;display:grid;gap:var(--gap)}
  .topbar{display:flex;align-items:center;gap:12px; min-height:var(--topbar-h);}
  .stamp{font-size:clamp(14px,4vw,18px);}
  .grid{display:grid; grid-template-columns:repeat(2,1fr); gap:var(--gap);}
  .box{
    position:relative; border-radius:14px; padding:18px;
    display:flex; flex-direction:column; align-items:center; justify-content:center;
    background:var(--base);
    aspect-ratio:1/1.5;
  }
  @media (min-width: 1024px){
    .wrap{max-width:680px;}
    .grid{ height:calc(100vh - var(--topbar-h) - var(--gap) - var(--gap) - 24px); grid-template-rows:repeat(2,1fr); }
    .box{aspect-ratio:auto;}
  }
  .val{
    font-variant-numeric:tabular-nums;
    font-weight:700; font-size:clamp(28px,9vw,44px);
    line-height:1.1; text-align:center;
  }
  .label{
    position:absolute; top:8px; left:10px;
    font-size:clamp(11px,2.6vw,13px); font-weight:600; opacity:.75; letter-spacing:.02em; user-select:none;
  }
  .spinner{
    margin-top:6px;
    font-size:clamp(20px,6vw,28px);
    animation:spin 1s linear infinite;
  }
  @keyframes spin{
    from { transform:rotate(0deg); }
    to   { transform:rotate(360deg); }
  }
</style>
</head>

<body>
<div class="wrap">
  <div class="topbar"><div id="created" class="stamp">--</div></div>

  <!-- card ids match the channel field names d1..d4 -->
  <div class="grid">
    <div class="box" id="d1">
      <span class="label">Dryer 1</span>
      <span class="val">--</span>
      <div class="spinner" hidden>&#127744;</div>
    </div>

    <div class="box" id="d2">
      <span class="label">Dryer 2</span>
      <span class="val">--</span>
      <div class="spinner" hidden>&#127744;</div>
    </div>

    <div class="box" id="d3">
      <span class="label">Washer 1</span>
      <span class="val">--</span>
      <div class="spinner" hidden>&#127744;</div>
    </div>

    <div class="box" id="d4">
      <span class="label">Washer 2</span>
      <span class="val">--</span>
      <div class="spinner" hidden>&#127744;</div>
    </div>
  </div>
</div>

<script>
  const THRESHOLD = __THRESHOLD__;
  const POLL_MS = 30000;

  // Responses are applied in request-start order; a slow response from an
  // older poll never overwrites a newer one.
  let pollSeq = 0;
  let appliedSeq = -1;

  function cssVar(name){
    return getComputedStyle(document.documentElement).getPropertyValue(name).trim();
  }

  function setCard(key, num){
    const el = document.getElementById(key);
    if(!el) return;

    if(num === null){
      el.querySelector('.val').textContent = '—';
      el.style.background = cssVar('--base');
    }else if(num < THRESHOLD){
      el.querySelector('.val').textContent = 'available';
      el.style.background = cssVar('--ok');
    }else{
      // equal to the threshold counts as in use
      el.querySelector('.val').textContent = 'in use';
      el.style.background = cssVar('--warn');
    }

    const spinner = el.querySelector('.spinner');
    if(spinner) spinner.hidden = !(num !== null && num >= THRESHOLD);
  }

  function apply(payload){
    const { created, values } = payload || {};

    document.getElementById('created').textContent =
      created ? new Date(created).toLocaleString() : '—';

    Object.entries(values || {}).forEach(([key, raw]) => {
      // same tolerant coercion the server applies, against type drift
      const n = (raw === null || raw === '') ? NaN : Number(raw);
      setCard(key, Number.isFinite(n) ? n : null);
    });
  }

  async function load(){
    const seq = pollSeq++;
    try{
      const r = await fetch('/api/data');
      if(!r.ok) throw new Error('HTTP ' + r.status);
      const payload = await r.json();
      if(seq < appliedSeq) return;
      appliedSeq = seq;
      apply(payload);
    }catch(e){
      if(seq < appliedSeq) return;
      appliedSeq = seq;
      // cards keep their last known state, only the stamp shows the failure
      document.getElementById('created').textContent = 'fetch error: ' + e.message;
    }
  }

  load();
  setInterval(load, POLL_MS);
</script>
</body>
</html>"##;
